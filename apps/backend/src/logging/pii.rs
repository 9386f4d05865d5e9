use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Registry for PII redaction regex patterns.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Base64url-like run (≥16 chars); covers each segment of a JWT
    pub fn token() -> &'static Regex {
        static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9_\-+/]{16,}={0,2}").unwrap()
        });
        &TOKEN_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// - Emails: keeps the first character of the local part and the full domain
/// - Opaque tokens: base64-like runs of 16+ chars become `[REDACTED_TOKEN]`
pub fn redact(input: &str) -> String {
    let email_redacted = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(0) | None => full_match.to_string(),
            Some(at_pos) => {
                let first_char = &full_match[..1];
                format!("{first_char}***{}", &full_match[at_pos..])
            }
        }
    });

    PiiRegexRegistry::token()
        .replace_all(&email_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// Redacts an identity-provider subject id: only the first 4 characters survive.
pub fn redact_subject(subject: &str) -> String {
    let mut chars = subject.chars();
    let prefix: String = chars.by_ref().take(4).collect();
    if chars.next().is_none() {
        "*".repeat(prefix.chars().count())
    } else {
        format!("{prefix}***")
    }
}

/// Displays its contents through [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
