use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Credentials stay valid for 24 hours after issue.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest validity window accepted from configuration (one year).
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Configuration for credential signing
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying credentials
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
    /// Validity window of a freshly issued credential
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret and the default TTL
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
