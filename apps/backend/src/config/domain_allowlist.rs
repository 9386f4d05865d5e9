//! Organizational-domain allow-list for federated logins.
//!
//! Identity providers such as Google Workspace attach a hosted-domain claim
//! (`hd`) to the profile. A present claim must match one of the configured
//! domains byte for byte; only the configured entries are normalized. An
//! absent claim is accepted unless the allow-list is built with
//! `require_claim`.

use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_ALLOWED_DOMAIN: &str = "unitn.it";

/// Outcome of checking a profile's domain claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainCheck {
    /// Claim present and allow-listed.
    Allowed,
    /// No claim and the policy tolerates that.
    Absent,
    /// Claim present but not allow-listed, or missing while required.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct DomainAllowlist {
    domains: Vec<String>,
    require_claim: bool,
}

impl Default for DomainAllowlist {
    fn default() -> Self {
        Self::new([DEFAULT_ALLOWED_DOMAIN], false)
    }
}

impl DomainAllowlist {
    /// Build an allow-list. Entries are normalized and empty entries dropped.
    pub fn new<I, S>(domains: I, require_claim: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| Self::normalize_domain(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();
        Self {
            domains,
            require_claim,
        }
    }

    /// Parse a comma-separated list such as `unitn.it, studenti.unitn.it`.
    pub fn parse(raw: &str, require_claim: bool) -> Self {
        Self::new(raw.split(','), require_claim)
    }

    pub fn require_claim(&self) -> bool {
        self.require_claim
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn check(&self, claim: Option<&str>) -> DomainCheck {
        match claim {
            None if self.require_claim => DomainCheck::Rejected,
            None => DomainCheck::Absent,
            Some(domain) => {
                if self.domains.iter().any(|allowed| allowed == domain) {
                    DomainCheck::Allowed
                } else {
                    DomainCheck::Rejected
                }
            }
        }
    }

    /// Canonical form of a configured entry: trimmed, NFKC, lowercase, no
    /// trailing root dot.
    fn normalize_domain(domain: &str) -> String {
        let lowered = domain.trim().nfkc().collect::<String>().to_lowercase();
        lowered.trim_end_matches('.').to_string()
    }
}
