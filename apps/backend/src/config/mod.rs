pub mod app_config;
pub mod domain_allowlist;

pub use app_config::AppConfig;
pub use domain_allowlist::{DomainAllowlist, DomainCheck};
