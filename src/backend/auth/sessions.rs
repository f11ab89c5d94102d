//! Session Tokens
//!
//! JWT issuance and verification for user sessions.
//!
//! The signing secret is owned by the server configuration and passed in
//! explicitly; this module never reads the environment. Verification is a
//! plain `Result` so callers handle both outcomes — an expired token and
//! an unverifiable token are distinct cases, and both are terminal for
//! the request.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username at issuance time
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Why a token failed verification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token's expiry is in the past
    #[error("token expired")]
    Expired,
    /// Malformed token or signature mismatch
    #[error("token invalid")]
    Invalid,
}

/// Create a signed session token
///
/// # Arguments
/// * `secret` - Process-wide signing secret (from server configuration)
/// * `user_id` - Subject user ID
/// * `username` - Subject username
/// * `ttl` - Validity window; the call site decides, there is no
///   hardcoded default here
pub fn issue_token(
    secret: &str,
    user_id: Uuid,
    username: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: now + ttl.num_seconds(),
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Returns the embedded claims, [`TokenError::Expired`] when the expiry
/// has passed, or [`TokenError::Invalid`] for anything else (bad
/// signature, malformed token). Zero leeway: expiry is exact.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let mut validation = Validation::default();
    validation.leeway = 0;

    match decode::<Claims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(TokenError::Expired),
            _ => Err(TokenError::Invalid),
        },
    }
}
