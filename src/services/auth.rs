use actix_web::HttpRequest;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while resolving the requester's identity
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token subject is not a user id")]
    InvalidSubject,
}

/// Claims carried by the access tokens issued by the auth service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Resolve the requesting user id from the `Authorization: Bearer` header.
///
/// Tokens are HS256-signed by the auth service; only validation happens here.
pub fn authenticate(req: &HttpRequest, secret: &str) -> Result<i64, AuthError> {
    let token = bearer_token(req).ok_or(AuthError::MissingToken)?;

    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    decoded
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthError::InvalidSubject)
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
