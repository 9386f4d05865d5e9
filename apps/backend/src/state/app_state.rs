use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::config::DomainAllowlist;
use crate::repos::ThesisStore;

/// Application state shared by every worker.
///
/// Everything the auth core needs is carried here explicitly; nothing is read
/// from the process environment after startup.
#[derive(Clone)]
pub struct AppState {
    /// Document store
    pub store: Arc<dyn ThesisStore>,
    /// Credential signing settings
    pub security: SecurityConfig,
    /// Organizational-domain allow-list for logins
    pub allowlist: DomainAllowlist,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ThesisStore>,
        security: SecurityConfig,
        allowlist: DomainAllowlist,
    ) -> Self {
        Self {
            store,
            security,
            allowlist,
        }
    }
}
