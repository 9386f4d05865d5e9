use std::sync::Arc;

use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use trenthesis_backend::adapters::{MemoryStore, Seed};
use trenthesis_backend::config::AppConfig;
use trenthesis_backend::middleware::cors::cors_middleware;
use trenthesis_backend::middleware::rate_limit::auth_rate_limit_config;
use trenthesis_backend::middleware::request_trace::RequestTrace;
use trenthesis_backend::middleware::structured_logger::StructuredLogger;
use trenthesis_backend::routes;
use trenthesis_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let store = match &config.seed_file {
        Some(path) => match Seed::from_file(path) {
            Ok(seed) => MemoryStore::from_seed(seed),
            Err(e) => {
                eprintln!("❌ Failed to load seed file {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => MemoryStore::new(),
    };

    println!(
        "🚀 Starting TrenThesis Backend on http://{}:{}",
        config.host, config.port
    );

    let data = web::Data::new(AppState::new(
        Arc::new(store),
        config.security.clone(),
        config.allowlist.clone(),
    ));
    let cors_origins = config.cors_origins.clone();
    let auth_backend = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let auth_limiter = RateLimiter::builder(
            auth_backend.clone(),
            auth_rate_limit_config().build(),
        )
        .add_headers()
        .build();

        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure_extractors)
            .service(web::scope("/health").configure(routes::health::configure_routes))
            .service(
                web::scope("/auth")
                    .wrap(auth_limiter)
                    .configure(routes::auth::configure_routes),
            )
            .service(
                web::scope("/api/professors").configure(routes::professors::configure_routes),
            )
            .service(web::scope("/api/topics").configure(routes::topics::configure_routes))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
