//! Ownership checks for mutating requests.
//!
//! Stateless: every mutating request is checked again, nothing is cached.
//! A body naming a different id than the path is treated as tampering and
//! is reported before ownership is even considered.

use super::AuthError;
use crate::logging::security;

/// The pair evaluated for one mutating request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipClaim {
    /// Professor id taken from the verified credential
    pub authenticated: i64,
    /// Professor id that owns the target resource
    pub owner: i64,
}

/// Fail with `IdentityMismatch` when the body names an id other than `expected`.
pub fn ensure_consistent_id(expected: i64, body_id: Option<i64>) -> Result<(), AuthError> {
    match body_id {
        Some(body_id) if body_id != expected => {
            security::mutation_denied("identity_mismatch", None, expected, body_id);
            Err(AuthError::IdentityMismatch)
        }
        _ => Ok(()),
    }
}

pub fn ensure_owner(claim: OwnershipClaim) -> Result<(), AuthError> {
    if claim.authenticated == claim.owner {
        Ok(())
    } else {
        security::mutation_denied(
            "not_owner",
            Some(claim.authenticated),
            claim.owner,
            claim.authenticated,
        );
        Err(AuthError::NotOwner)
    }
}

/// Guard for resources keyed by the professor id itself (`/professors/{id}`).
pub fn authorize_mutation(
    authenticated_id: i64,
    path_id: i64,
    body_id: Option<i64>,
) -> Result<(), AuthError> {
    ensure_consistent_id(path_id, body_id)?;
    ensure_owner(OwnershipClaim {
        authenticated: authenticated_id,
        owner: path_id,
    })
}

/// Guard for resources owned by a professor but keyed by their own id
/// (`/topics/{id}`).
///
/// The body may repeat the resource id and the owning professor id; either
/// one disagreeing with the stored value is `IdentityMismatch`.
pub fn authorize_owned_mutation(
    authenticated_id: i64,
    path_id: i64,
    body_id: Option<i64>,
    owner_id: i64,
    body_owner_id: Option<i64>,
) -> Result<(), AuthError> {
    ensure_consistent_id(path_id, body_id)?;
    ensure_consistent_id(owner_id, body_owner_id)?;
    ensure_owner(OwnershipClaim {
        authenticated: authenticated_id,
        owner: owner_id,
    })
}
