use std::time::SystemTime;

use actix_web::http::header;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;

use crate::auth::jwt::mint_credential;
use crate::auth::redirect::{resolve, RedirectDecision};
use crate::auth::{verify_profile, AuthError, ExternalProfile};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CurrentProfessor;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub callback: Option<String>,
}

/// Translate a redirect decision into a response: 200 with the credential,
/// 302 to the callback, or 422 for a malformed callback.
fn deliver(decision: RedirectDecision) -> Result<HttpResponse, AppError> {
    match decision {
        RedirectDecision::RenderInline(credential) => Ok(HttpResponse::Ok().json(credential)),
        RedirectDecision::RedirectTo { .. } => {
            let location = decision
                .location()
                .ok_or_else(|| AppError::internal("redirect without location"))?;
            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish())
        }
        RedirectDecision::Reject => Err(AuthError::MalformedCallbackTarget.into()),
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "TrenThesis authentication API",
        "endpoints": {
            "login": "POST /auth/login?callback=<url>",
            "token": "GET /auth/token?callback=<url>",
            "profile": "GET /auth/profile",
        }
    }))
}

/// Federated login: the identity-provider profile arrives as the body.
async fn login(
    query: web::Query<CallbackQuery>,
    profile: web::Json<ExternalProfile>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let professor = verify_profile(&profile, &app_state.allowlist, &*app_state.store).await?;

    let credential = mint_credential(professor.id, SystemTime::now(), &app_state.security)?;

    deliver(resolve(query.callback.as_deref(), credential))
}

/// Exchange a valid credential for a fresh one.
async fn token(
    current: CurrentProfessor,
    query: web::Query<CallbackQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let credential = mint_credential(current.id, SystemTime::now(), &app_state.security)?;

    deliver(resolve(query.callback.as_deref(), credential))
}

async fn not_authorized() -> Result<HttpResponse, AppError> {
    Err(AppError::unauthorized())
}

async fn profile(
    current: CurrentProfessor,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let professor = app_state
        .store
        .find_professor_by_id(current.id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ProfessorNotFound,
                format!("Professor {} not found", current.id),
            )
        })?;

    Ok(HttpResponse::Ok().json(professor))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(index))
        .route("/login", web::post().to(login))
        .route("/token", web::get().to(token))
        .route("/not_authorized", web::get().to(not_authorized))
        .route("/profile", web::get().to(profile));
}
