// Integration tests for /api/topics/{id}.

use actix_web::http::header;
use actix_web::test;
use serde_json::json;

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::fixtures::{bearer_for, seeded_store, state_with};

#[actix_web::test]
async fn test_get_topic_is_public() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/topics/1").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["professor_id"], 1);
    assert_eq!(body["title"], "Distributed tracing");
}

#[actix_web::test]
async fn test_owner_updates_topic() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::put()
        .uri("/api/topics/1")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "id": 1, "professor_id": 1, "title": "Tracing at scale" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["modified"], true);
    assert_eq!(body["title"], "Tracing at scale");
}

#[actix_web::test]
async fn test_resubmitting_same_topic_is_not_modified() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::put()
        .uri("/api/topics/1")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "id": 1, "title": "Distributed tracing" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["modified"], false);
}

#[actix_web::test]
async fn test_non_owner_cannot_update_topic() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::put()
        .uri("/api/topics/2")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "title": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 403, "NOT_OWNER", None).await;
}

#[actix_web::test]
async fn test_topic_body_id_mismatch_is_flagged_before_lookup() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    // Topic 99 does not exist; the tampered body is still reported as such
    let req = test::TestRequest::put()
        .uri("/api/topics/99")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "id": 1, "title": "Sneaky" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(
        resp,
        403,
        "IDENTITY_MISMATCH",
        Some("Malicious update detected"),
    )
    .await;
}

#[actix_web::test]
async fn test_topic_cannot_be_reassigned() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::put()
        .uri("/api/topics/1")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "id": 1, "professor_id": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 403, "IDENTITY_MISMATCH", None).await;
}

#[actix_web::test]
async fn test_update_missing_topic_is_not_found() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::put()
        .uri("/api/topics/99")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "title": "Anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 404, "TOPIC_NOT_FOUND", None).await;
}

#[actix_web::test]
async fn test_owner_deletes_topic() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::delete()
        .uri("/api/topics/2")
        .insert_header((header::AUTHORIZATION, bearer_for(2)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::get().uri("/api/topics/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "TOPIC_NOT_FOUND", None).await;
}

#[actix_web::test]
async fn test_non_owner_cannot_delete_topic() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::delete()
        .uri("/api/topics/2")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 403, "NOT_OWNER", None).await;

    let req = test::TestRequest::get().uri("/api/topics/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn test_non_numeric_topic_id_is_bad_request() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/topics/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "BAD_REQUEST", None).await;
}

#[actix_web::test]
async fn test_professor_creates_own_topic() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/topics")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "professor_id": 1, "title": "Title", "description": "Description" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("created topic should have an id");
    assert_eq!(created["professor_id"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/topics/{id}"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Title");
    assert_eq!(body["description"], "Description");
}

#[actix_web::test]
async fn test_created_topic_defaults_to_authenticated_owner() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/topics")
        .insert_header((header::AUTHORIZATION, bearer_for(2)))
        .set_json(json!({ "title": "Bridges" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["professor_id"], 2);
}

#[actix_web::test]
async fn test_cannot_create_topic_for_another_professor() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/topics")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "professor_id": 2, "title": "Title", "description": "Description" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 403, "NOT_OWNER", None).await;
}

#[actix_web::test]
async fn test_create_topic_without_credential_is_unauthorized() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/topics")
        .set_json(json!({ "professor_id": 1, "title": "Title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_BEARER", None).await;
}

#[actix_web::test]
async fn test_create_topic_with_blank_title_is_rejected() {
    let app = create_test_app(state_with(seeded_store()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/topics")
        .insert_header((header::AUTHORIZATION, bearer_for(1)))
        .set_json(json!({ "title": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "VALIDATION_ERROR", None).await;
}
