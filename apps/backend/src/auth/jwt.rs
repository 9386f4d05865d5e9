use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::state::security_config::SecurityConfig;

/// Claims included in backend-issued credentials.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Professor id, as a decimal string
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// A signed credential as handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub token: String,
    /// Expiry (seconds since epoch)
    pub expires_at: i64,
}

fn unix_seconds(now: SystemTime) -> Result<i64, AuthError> {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::Clock("clock is before the unix epoch".to_string()))?
        .as_secs();
    i64::try_from(secs).map_err(|_| AuthError::Clock("clock is out of range".to_string()))
}

/// Mint a credential for `professor_id`, valid for `security.token_ttl` from `now`.
pub fn mint_credential(
    professor_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Credential, AuthError> {
    let iat = unix_seconds(now)?;
    let exp = i64::try_from(security.token_ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AuthError::Signing("token lifetime out of range".to_string()))?;

    let claims = Claims {
        sub: professor_id.to_string(),
        iat,
        exp,
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))?;

    Ok(Credential {
        token,
        expires_at: exp,
    })
}

/// Verify a credential and return the professor id it was issued for.
///
/// `decode` checks the signature before it deserializes the claims, so no
/// claim of an unsigned or tampered token is ever inspected. Expiry is
/// evaluated afterwards against the caller-supplied `now`.
///
/// Errors:
/// - signature mismatch, or a header naming another algorithm → `TokenInvalidSignature`
/// - `now` at or past `exp` → `TokenExpired`
/// - anything that cannot be decoded → `TokenMalformed`
/// - `now` before the Unix epoch → `Clock`
pub fn verify_credential(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<i64, AuthError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            AuthError::TokenInvalidSignature
        }
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenMalformed,
    })?;

    if unix_seconds(now)? >= claims.exp {
        return Err(AuthError::TokenExpired);
    }

    claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthError::TokenMalformed)
}
