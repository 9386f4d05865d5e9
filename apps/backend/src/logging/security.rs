use tracing::warn;

use crate::logging::pii::{redact_subject, Redacted};
use crate::trace_ctx;

/// Log a rejected federated login.
pub fn login_rejected(reason: &str, subject: &str, domain: Option<&str>) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_REJECTED",
        %trace_id,
        subject = %redact_subject(subject),
        domain = domain.unwrap_or("<absent>"),
        reason,
        "Authentication failure"
    );
}

/// Log a denied mutation; `reason` distinguishes tampering from plain ownership.
pub fn mutation_denied(reason: &str, authenticated: Option<i64>, expected: i64, supplied: i64) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_MUTATION_DENIED",
        %trace_id,
        authenticated,
        expected,
        supplied,
        reason,
        "Authorization failure"
    );
}

/// Log a credential that failed verification. The token itself is redacted.
pub fn credential_rejected(reason: &str, token: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_CREDENTIAL_REJECTED",
        %trace_id,
        token = %Redacted(token),
        reason,
        "Credential rejected"
    );
}
