use std::time::SystemTime;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use super::auth_token::AuthToken;
use crate::auth::jwt::verify_credential;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Professor authenticated by the request's credential.
///
/// Only the signature and expiry are checked; credentials are stateless, so
/// no store lookup happens here. The result is also left in the request
/// extensions for the request log.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CurrentProfessor {
    pub id: i64,
}

impl CurrentProfessor {
    fn authenticate(req: &HttpRequest) -> Result<Self, AppError> {
        let token = AuthToken::from_http_request(req)?;
        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;
        let id = verify_credential(&token.token, SystemTime::now(), &app_state.security)
            .inspect_err(|e| security::credential_rejected(&e.to_string(), &token.token))?;

        let professor = CurrentProfessor { id };
        req.extensions_mut().insert(professor);
        Ok(professor)
    }
}

impl FromRequest for CurrentProfessor {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = Self::authenticate(req);
        Box::pin(async move { result })
    }
}
