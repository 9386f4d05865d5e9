//! Error codes for the TrenThesis backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed bearer credential
    UnauthorizedMissingBearer,
    /// Credential could not be decoded
    TokenMalformed,
    /// Credential signature does not match
    TokenInvalidSignature,
    /// Credential is past its validity window
    TokenExpired,

    // Authorization
    /// Access denied
    Forbidden,
    /// No professor is registered for the external identity
    UnknownIdentity,
    /// The identity's organizational domain is not allow-listed
    DomainRejected,
    /// Request body names a different id than the path
    IdentityMismatch,
    /// Caller does not own the resource
    NotOwner,

    // Request validation
    /// Callback target is not a valid URL
    MalformedCallbackTarget,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    ProfessorNotFound,
    TopicNotFound,
    NotFound,

    // Infrastructure
    /// Document store unreachable
    DbUnavailable,
    /// Document store timed out
    DbTimeout,
    /// Stored data failed to decode
    DataCorruption,
    /// Unexpected server-side failure
    InternalError,
    /// Invalid process configuration
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::TokenMalformed => "TOKEN_MALFORMED",
            Self::TokenInvalidSignature => "TOKEN_INVALID_SIGNATURE",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Forbidden => "FORBIDDEN",
            Self::UnknownIdentity => "UNKNOWN_IDENTITY",
            Self::DomainRejected => "DOMAIN_REJECTED",
            Self::IdentityMismatch => "IDENTITY_MISMATCH",
            Self::NotOwner => "NOT_OWNER",
            Self::MalformedCallbackTarget => "MALFORMED_CALLBACK_TARGET",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::ProfessorNotFound => "PROFESSOR_NOT_FOUND",
            Self::TopicNotFound => "TOPIC_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
