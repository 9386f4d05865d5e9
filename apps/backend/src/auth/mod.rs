//! Authentication and authorization core.
//!
//! Four stateless pieces, leaves first:
//! - [`identity`]: accept or reject an external identity-provider profile
//! - [`jwt`]: mint and verify signed, time-bounded credentials
//! - [`redirect`]: decide how a freshly issued credential reaches the caller
//! - [`ownership`]: allow or deny a mutation for the authenticated professor
//!
//! None of them format HTTP responses; see `crate::error` for the mapping.

pub mod error;
pub mod identity;
pub mod jwt;
pub mod ownership;
pub mod redirect;

pub use error::AuthError;
pub use identity::{verify_profile, ExternalProfile};
pub use jwt::{mint_credential, verify_credential, Claims, Credential};
pub use ownership::{
    authorize_mutation, authorize_owned_mutation, ensure_consistent_id, ensure_owner, OwnershipClaim,
};
pub use redirect::{is_valid_callback_target, resolve, RedirectDecision};
