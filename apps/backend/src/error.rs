use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::errors::{DomainError, ErrorCode, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// HTTP-facing error returned by every handler and extractor.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {detail}")]
    Unauthorized { code: ErrorCode, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Unprocessable: {detail}")]
    Unprocessable { code: ErrorCode, detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthorized { code, .. }
            | AppError::Forbidden { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::Unprocessable { code, .. }
            | AppError::DbUnavailable { code, .. }
            | AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Unauthorized { detail, .. }
            | AppError::Forbidden { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::Unprocessable { detail, .. }
            | AppError::DbUnavailable { detail, .. }
            | AppError::Internal { detail, .. }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            // The front end keys store outages on 505.
            AppError::DbUnavailable { .. } => StatusCode::HTTP_VERSION_NOT_SUPPORTED,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            code: ErrorCode::Unauthorized,
            detail: "Authentication required".to_string(),
        }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::Unauthorized {
            code: ErrorCode::UnauthorizedMissingBearer,
            detail: "Missing or malformed access token".to_string(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::InternalError,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let detail = err.to_string();
        match err {
            AuthError::TokenMalformed => Self::Unauthorized {
                code: ErrorCode::TokenMalformed,
                detail,
            },
            AuthError::TokenInvalidSignature => Self::Unauthorized {
                code: ErrorCode::TokenInvalidSignature,
                detail,
            },
            AuthError::TokenExpired => Self::Unauthorized {
                code: ErrorCode::TokenExpired,
                detail,
            },
            AuthError::UnknownIdentity => Self::Forbidden {
                code: ErrorCode::UnknownIdentity,
                detail,
            },
            AuthError::DomainRejected => Self::Forbidden {
                code: ErrorCode::DomainRejected,
                detail,
            },
            AuthError::IdentityMismatch => Self::Forbidden {
                code: ErrorCode::IdentityMismatch,
                detail,
            },
            AuthError::NotOwner => Self::Forbidden {
                code: ErrorCode::NotOwner,
                detail,
            },
            AuthError::MalformedCallbackTarget => Self::Unprocessable {
                code: ErrorCode::MalformedCallbackTarget,
                detail,
            },
            AuthError::Signing(_) | AuthError::Clock(_) => Self::internal(detail),
            AuthError::Store(inner) => inner.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => Self::BadRequest {
                code: ErrorCode::ValidationError,
                detail,
            },
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Professor => ErrorCode::ProfessorNotFound,
                    NotFoundKind::Topic => ErrorCode::TopicNotFound,
                    _ => ErrorCode::NotFound,
                };
                Self::NotFound { code, detail }
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => Self::DbUnavailable {
                    code: ErrorCode::DbUnavailable,
                    detail,
                },
                InfraErrorKind::Timeout => Self::DbUnavailable {
                    code: ErrorCode::DbTimeout,
                    detail,
                },
                InfraErrorKind::DataCorruption => Self::Internal {
                    code: ErrorCode::DataCorruption,
                    detail,
                },
                _ => Self::internal(detail),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://trenthesis.app/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(problem_details)
    }
}
