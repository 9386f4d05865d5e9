//! Rate limiting for the login endpoints.

use std::time::Duration;

use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;

/// Login and token exchange: 10 requests per 60 seconds per IP address.
pub fn auth_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(Duration::from_secs(60), 10).real_ip_key()
}
