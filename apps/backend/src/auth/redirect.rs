//! Delivery of a freshly issued credential to a caller-supplied callback.
//!
//! The callback target is untrusted input. It is checked against the
//! RFC 3986 URI-reference grammar before any redirect is built: relative
//! references (`/home`, `valid_url`) and absolute URIs are both accepted,
//! anything with characters outside the grammar or a broken percent escape
//! (`%%%%%`) is rejected.

use std::sync::LazyLock;

use regex::Regex;

use super::Credential;

/// Query parameter that carries the credential on redirects.
pub const TOKEN_PARAM: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// No callback: return the credential in the response body.
    RenderInline(Credential),
    /// Redirect to `target` with the credential attached.
    RedirectTo {
        target: String,
        credential: Credential,
    },
    /// Callback present but not a valid URL.
    Reject,
}

impl RedirectDecision {
    /// Redirect location with the credential appended as a query parameter,
    /// inserted before any fragment. `None` unless this is `RedirectTo`.
    pub fn location(&self) -> Option<String> {
        let RedirectDecision::RedirectTo { target, credential } = self else {
            return None;
        };
        let (base, fragment) = match target.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (target.as_str(), None),
        };
        let separator = match base.find('?') {
            None => "?",
            Some(idx) if idx + 1 == base.len() || base.ends_with('&') => "",
            Some(_) => "&",
        };
        let mut location = format!("{base}{separator}{TOKEN_PARAM}={}", credential.token);
        if let Some(fragment) = fragment {
            location.push('#');
            location.push_str(fragment);
        }
        Some(location)
    }
}

/// Decide how `credential` reaches the caller.
pub fn resolve(raw_target: Option<&str>, credential: Credential) -> RedirectDecision {
    match raw_target {
        None => RedirectDecision::RenderInline(credential),
        Some(target) if is_valid_callback_target(target) => RedirectDecision::RedirectTo {
            target: target.to_string(),
            credential,
        },
        Some(_) => RedirectDecision::Reject,
    }
}

struct UriRegexRegistry;

impl UriRegexRegistry {
    /// RFC 3986 appendix B component split.
    fn components() -> &'static Regex {
        static COMPONENTS: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
                .unwrap()
        });
        &COMPONENTS
    }

    fn scheme() -> &'static Regex {
        static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap()
        });
        &SCHEME
    }

    /// unreserved / pct-encoded / sub-delims / ":" / "@" / "/" / "?"
    fn tail_chars() -> &'static Regex {
        static TAIL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[A-Za-z0-9\-._~%!$&'()*+,;=:@/?]*$").unwrap()
        });
        &TAIL
    }

    /// unreserved / pct-encoded / sub-delims
    fn reg_name() -> &'static Regex {
        static REG_NAME: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[A-Za-z0-9\-._~%!$&'()*+,;=]*$").unwrap()
        });
        &REG_NAME
    }

    fn ip_literal() -> &'static Regex {
        static IP_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^\[[A-Za-z0-9\-._~!$&'()*+,;=:]+\]$").unwrap()
        });
        &IP_LITERAL
    }
}

/// Every `%` must introduce exactly two hex digits.
fn percent_escapes_are_complete(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

fn authority_is_valid(authority: &str) -> bool {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            if !UriRegexRegistry::reg_name().is_match(&userinfo.replace(':', "")) {
                return false;
            }
            host_port
        }
        None => authority,
    };

    let (host, port) = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(end) => {
                let (host, rest) = host_port.split_at(end + 1);
                match rest.strip_prefix(':') {
                    Some(port) => (host, Some(port)),
                    None if rest.is_empty() => (host, None),
                    None => return false,
                }
            }
            None => return false,
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    let host_ok = if host.starts_with('[') {
        UriRegexRegistry::ip_literal().is_match(host)
    } else {
        UriRegexRegistry::reg_name().is_match(host)
    };
    let port_ok = port.is_none_or(|p| p.bytes().all(|b| b.is_ascii_digit()));

    host_ok && port_ok
}

/// Whether `target` is a syntactically valid RFC 3986 URI reference.
///
/// Empty and whitespace-only targets are rejected: they name no destination.
pub fn is_valid_callback_target(target: &str) -> bool {
    if target.trim().is_empty() || !percent_escapes_are_complete(target) {
        return false;
    }

    let Some(caps) = UriRegexRegistry::components().captures(target) else {
        return false;
    };

    if let Some(scheme) = caps.get(1) {
        if !UriRegexRegistry::scheme().is_match(scheme.as_str()) {
            return false;
        }
    }

    if let Some(authority) = caps.get(2) {
        if !authority_is_valid(authority.as_str()) {
            return false;
        }
    }

    let path = caps.get(3).map_or("", |m| m.as_str());
    if !UriRegexRegistry::tail_chars().is_match(path) {
        return false;
    }

    [caps.get(4), caps.get(5)]
        .into_iter()
        .flatten()
        .all(|m| UriRegexRegistry::tail_chars().is_match(m.as_str()))
}
