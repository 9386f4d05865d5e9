use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod auth;
pub mod health;
pub mod professors;
pub mod topics;

/// Render extractor failures (bad JSON, query or path) as Problem Details.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }));
}

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires the same paths under scopes with
/// additional middleware (rate limiting on `/auth`).
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(web::scope("/health").configure(health::configure_routes))
        .service(web::scope("/auth").configure(auth::configure_routes))
        .service(web::scope("/api/professors").configure(professors::configure_routes))
        .service(web::scope("/api/topics").configure(topics::configure_routes));
}
