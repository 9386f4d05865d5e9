//! Error handling for the TrenThesis backend.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, InfraErrorKind, NotFoundKind};
pub use error_code::ErrorCode;
