#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use adapters::{MemoryStore, Seed};
pub use auth::{
    mint_credential, resolve, verify_credential, verify_profile, AuthError, Claims, Credential,
    ExternalProfile, RedirectDecision,
};
pub use config::{AppConfig, DomainAllowlist};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{AuthToken, CurrentProfessor};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use repos::{ProfessorDirectory, ThesisStore};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
