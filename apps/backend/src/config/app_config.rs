//! Process configuration, read once from the environment at startup.
//!
//! Environment variables must be set by the runtime environment:
//! - Docker: via docker-compose env_file or docker run --env-file
//! - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::domain_allowlist::{DomainAllowlist, DEFAULT_ALLOWED_DOMAIN};
use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, MAX_TOKEN_TTL};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub security: SecurityConfig,
    pub allowlist: DomainAllowlist,
    pub cors_origins: Vec<String>,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config("BACKEND_PORT must be a valid port number"))?,
            None => 3001,
        };

        let secret = lookup("BACKEND_JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;
        let mut security = SecurityConfig::new(secret.into_bytes());
        if let Some(raw) = lookup("BACKEND_TOKEN_TTL_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0 && *secs <= MAX_TOKEN_TTL.as_secs())
                .ok_or_else(|| {
                    AppError::config(format!(
                        "BACKEND_TOKEN_TTL_SECS must be between 1 and {}",
                        MAX_TOKEN_TTL.as_secs()
                    ))
                })?;
            security = security.with_token_ttl(Duration::from_secs(secs));
        }

        let require_claim = match lookup("REQUIRE_DOMAIN_CLAIM") {
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                AppError::config("REQUIRE_DOMAIN_CLAIM must be `true` or `false`")
            })?,
            None => false,
        };
        let domains =
            lookup("ALLOWED_DOMAINS").unwrap_or_else(|| DEFAULT_ALLOWED_DOMAIN.to_string());
        let allowlist = DomainAllowlist::parse(&domains, require_claim);

        // Comma-separated origins, e.g. http://localhost:8080,https://trenthesis.example
        let cors_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
            .map(str::to_string)
            .collect();

        let seed_file = lookup("SEED_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            security,
            allowlist,
            cors_origins,
            seed_file,
        })
    }
}
