//! Bearer-token verification for guarded endpoints.
//!
//! Token issuance lives in a separate auth service; this extractor only
//! verifies the HS256 signature and expiry of whatever token the caller
//! presents.

use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Verified JWT principal injected into request handlers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject, the user identifier assigned by the auth service.
    pub sub: String,
    pub username: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .app_data::<web::Data<ServerConfig>>()
            .and_then(|config| {
                let token = bearer_token(req)?;
                decode::<AuthenticatedUser>(
                    token,
                    &DecodingKey::from_secret(config.secret.as_bytes()),
                    &Validation::new(Algorithm::HS256),
                )
                .ok()
            })
            .map(|data| data.claims);

        std::future::ready(user.ok_or_else(|| ErrorUnauthorized("invalid or missing bearer token")))
    }
}
