//! Identity verification for federated logins.

use serde::Deserialize;
use tracing::debug;

use super::AuthError;
use crate::config::{DomainAllowlist, DomainCheck};
use crate::entities::Professor;
use crate::logging::pii::redact_subject;
use crate::logging::security;
use crate::repos::ProfessorDirectory;

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(alias = "sub")]
    id: String,
    #[serde(default)]
    hd: Option<String>,
}

/// Google-style payloads wrap the claims in `_json`; bare claims are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfilePayload {
    Envelope {
        #[serde(rename = "_json")]
        inner: RawProfile,
    },
    Bare(RawProfile),
}

/// Identity-provider profile for one login attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ProfilePayload")]
pub struct ExternalProfile {
    /// Provider-assigned subject id
    pub subject: String,
    /// Organizational-domain claim (`hd`), if the provider sent one
    pub domain: Option<String>,
}

impl From<ProfilePayload> for ExternalProfile {
    fn from(payload: ProfilePayload) -> Self {
        let raw = match payload {
            ProfilePayload::Envelope { inner } => inner,
            ProfilePayload::Bare(raw) => raw,
        };
        Self {
            subject: raw.id,
            domain: raw.hd,
        }
    }
}

impl ExternalProfile {
    pub fn new(subject: impl Into<String>, domain: Option<&str>) -> Self {
        Self {
            subject: subject.into(),
            domain: domain.map(str::to_string),
        }
    }
}

/// Accept or reject a profile and resolve it to a local professor.
///
/// A present domain claim that is not allow-listed fails with
/// `DomainRejected` before the store is consulted, so the outcome does not
/// depend on whether the subject is known. A subject with no professor fails
/// with `UnknownIdentity`. Store failures propagate as `AuthError::Store`.
pub async fn verify_profile<D>(
    profile: &ExternalProfile,
    allowlist: &DomainAllowlist,
    directory: &D,
) -> Result<Professor, AuthError>
where
    D: ProfessorDirectory + ?Sized,
{
    let domain = profile.domain.as_deref();

    if allowlist.check(domain) == DomainCheck::Rejected {
        security::login_rejected("domain_not_allowed", &profile.subject, domain);
        return Err(AuthError::DomainRejected);
    }

    if profile.subject.trim().is_empty() {
        security::login_rejected("empty_subject", &profile.subject, domain);
        return Err(AuthError::UnknownIdentity);
    }

    match directory.find_professor_by_subject(&profile.subject).await? {
        Some(professor) => {
            debug!(
                subject = %redact_subject(&profile.subject),
                professor_id = professor.id,
                "Login accepted"
            );
            Ok(professor)
        }
        None => {
            security::login_rejected("unknown_subject", &profile.subject, domain);
            Err(AuthError::UnknownIdentity)
        }
    }
}
