use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Legacy header still sent by the static front end.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Raw credential taken from the request.
///
/// `Authorization: Bearer <token>` wins; `x-access-token: <token>` is the
/// fallback. A present but malformed `Authorization` header is an error even
/// if the fallback is set.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub fn from_http_request(req: &HttpRequest) -> Result<Self, AppError> {
        if let Some(auth_header) = req.headers().get(header::AUTHORIZATION) {
            let auth_value = auth_header
                .to_str()
                .map_err(|_| AppError::unauthorized_missing_bearer())?;

            // Parse "Bearer <token>" format
            let parts: Vec<&str> = auth_value.split_whitespace().collect();
            if parts.len() != 2 || parts[0] != "Bearer" {
                return Err(AppError::unauthorized_missing_bearer());
            }

            return Ok(AuthToken {
                token: parts[1].to_string(),
            });
        }

        let token = req
            .headers()
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(AppError::unauthorized_missing_bearer)?;

        Ok(AuthToken {
            token: token.to_string(),
        })
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = Self::from_http_request(req);
        Box::pin(async move { result })
    }
}
