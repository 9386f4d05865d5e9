use thiserror::Error;

use crate::errors::DomainError;

/// Failure kinds of the authentication and authorization core.
///
/// Every kind is terminal for the current request. Mapping to HTTP lives in
/// `crate::error`, never here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no professor is registered for this identity")]
    UnknownIdentity,
    #[error("the organizational domain of this identity is not allowed")]
    DomainRejected,
    #[error("the credential could not be decoded")]
    TokenMalformed,
    #[error("the credential signature is invalid")]
    TokenInvalidSignature,
    #[error("the credential has expired")]
    TokenExpired,
    #[error(
        "Malicious update detected: you are not allowed to put a different id in the body of the request."
    )]
    IdentityMismatch,
    #[error("you are not allowed to modify resources owned by another professor")]
    NotOwner,
    #[error("the callback target is not a valid URL")]
    MalformedCallbackTarget,
    #[error("failed to sign credential: {0}")]
    Signing(String),
    /// The server clock cannot produce a Unix timestamp.
    #[error("system clock error: {0}")]
    Clock(String),
    /// Persistence failure surfaced while resolving an identity.
    #[error(transparent)]
    Store(#[from] DomainError),
}
