use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the static front end.
///
/// `origins` comes from `CORS_ALLOWED_ORIGINS`; when empty, only the local
/// development server is allowed.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let effective_origins: Vec<&str> = if origins.is_empty() {
        vec!["http://localhost:8080", "http://127.0.0.1:8080"]
    } else {
        origins.iter().map(String::as_str).collect()
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-access-token"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
