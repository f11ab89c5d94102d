//! Get Current User Handler
//!
//! GET /api/auth/me
//!
//! Runs behind the identity middleware, so the verified identity arrives
//! in the request extensions. The token's claims are trusted by the
//! gate; this handler is the one place that re-reads the credential
//! store, and a missing record is an explicit 404 — an account deleted
//! after token issuance is not a crash.

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::auth::users::find_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing/invalid token (rejected by middleware)
/// * `404 Not Found` - account no longer exists
/// * `503 Service Unavailable` - database not configured
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    let user = find_by_id(&pool, identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User from token no longer exists: {}", identity.user_id);
            ApiError::UserNotFound
        })?;

    Ok(Json(MeResponse {
        user: user.to_response(),
    }))
}
