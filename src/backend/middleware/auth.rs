//! Identity Middleware
//!
//! Gate for routes that require an authenticated caller. It extracts the
//! bearer token from the `Authorization` header, verifies it against the
//! configured signing secret, and attaches a [`VerifiedIdentity`] to the
//! request extensions for handlers to consume.
//!
//! The gate trusts the token's claims as-is and never consults the
//! credential store — claims go stale only until token expiry, which is
//! the accepted trade-off here. Missing, malformed, expired, and
//! unverifiable tokens are all answered with 401.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Verified caller identity extracted from a session token
///
/// Produced only by [`identity_middleware`]; service handlers take it as
/// an explicit value instead of re-parsing ambient request state.
#[derive(Clone, Debug)]
pub struct VerifiedIdentity {
    pub user_id: Uuid,
    pub username: String,
}

/// Identity middleware
///
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches [`VerifiedIdentity`] to the request extensions
///
/// Returns 401 when the token is missing, expired, or invalid.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized("token not provided, unauthorized")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthorized("token not provided, unauthorized")
    })?;

    let claims = verify_token(&state.auth.jwt_secret, token).map_err(|e| {
        tracing::warn!("Token rejected: {:?}", e);
        ApiError::from(e)
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::TokenInvalid
    })?;

    request.extensions_mut().insert(VerifiedIdentity {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the verified identity
///
/// Usable as a handler parameter on any route behind
/// [`identity_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub VerifiedIdentity);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<VerifiedIdentity>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("VerifiedIdentity not found in request extensions");
                ApiError::Unauthorized("token not provided, unauthorized")
            })?;

        Ok(AuthUser(identity))
    }
}
