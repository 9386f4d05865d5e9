// Integration tests for POST /auth/login.

use actix_web::http::header;
use actix_web::test;
use serde_json::json;
use std::time::SystemTime;
use trenthesis_backend::auth::verify_credential;

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::fixtures::{security, seeded_store, state_with, KNOWN_SUBJECT};

fn profile_body(subject: &str, domain: Option<&str>) -> serde_json::Value {
    match domain {
        Some(hd) => json!({ "provider": "google", "_json": { "id": subject, "hd": hd } }),
        None => json!({ "provider": "google", "_json": { "id": subject } }),
    }
}

// ============================================================================
// Happy Path Tests
// ============================================================================

#[actix_web::test]
async fn test_login_without_callback_renders_credential() -> Result<(), Box<dyn std::error::Error>>
{
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(profile_body(KNOWN_SUBJECT, Some("unitn.it")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token should be a string");
    assert!(body["expires_at"].as_i64().is_some());

    let professor_id = verify_credential(token, SystemTime::now(), &security())?;
    assert_eq!(professor_id, 1);

    Ok(())
}

#[actix_web::test]
async fn test_login_with_callback_redirects_with_token() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login?callback=https%3A%2F%2Ftrenthesis.app%2Fprofile%3Ftab%3D1")
        .set_json(profile_body(KNOWN_SUBJECT, Some("unitn.it")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 302);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a Location header");
    let token = location
        .strip_prefix("https://trenthesis.app/profile?tab=1&token=")
        .expect("token should be appended to the callback query");

    assert_eq!(verify_credential(token, SystemTime::now(), &security())?, 1);

    Ok(())
}

#[actix_web::test]
async fn test_login_accepts_bare_profile_without_domain() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "id": KNOWN_SUBJECT }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}

// ============================================================================
// Rejections
// ============================================================================

#[actix_web::test]
async fn test_login_with_malformed_callback_is_unprocessable() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    // Decodes to "%%%%%"
    let req = test::TestRequest::post()
        .uri("/auth/login?callback=%25%25%25%25%25")
        .set_json(profile_body(KNOWN_SUBJECT, Some("unitn.it")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 422, "MALFORMED_CALLBACK_TARGET", None).await;
}

#[actix_web::test]
async fn test_login_with_empty_callback_is_unprocessable() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login?callback=")
        .set_json(profile_body(KNOWN_SUBJECT, Some("unitn.it")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 422, "MALFORMED_CALLBACK_TARGET", None).await;
}

#[actix_web::test]
async fn test_login_from_foreign_domain_is_forbidden() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(profile_body(KNOWN_SUBJECT, Some("gmail.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 403, "DOMAIN_REJECTED", None).await;
}

#[actix_web::test]
async fn test_login_with_unknown_subject_is_forbidden() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(profile_body("999", Some("unitn.it")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 403, "UNKNOWN_IDENTITY", None).await;
}

#[actix_web::test]
async fn test_login_with_store_offline_reports_outage() {
    let store = seeded_store();
    store.set_online(false);
    let app = create_test_app(state_with(store))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(profile_body(KNOWN_SUBJECT, Some("unitn.it")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 505, "DB_UNAVAILABLE", None).await;
}

#[actix_web::test]
async fn test_login_with_invalid_body_is_bad_request() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "name": "no subject here" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "BAD_REQUEST", None).await;
}
