//! Login Handler
//!
//! POST /api/auth/login
//!
//! # Authentication Process
//!
//! 1. Look up the user by username or email
//! 2. Return 404 immediately when no record matches — the password path
//!    is never entered for a missing user
//! 3. Verify the password against the stored bcrypt hash
//! 4. Issue a session token

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::issue_token;
use crate::backend::auth::users::find_by_identifier;
use crate::backend::error::ApiError;
use crate::backend::server::state::AuthConfig;

/// Login handler
///
/// # Errors
///
/// * `404 Not Found` - no user with that username or email
/// * `401 Unauthorized` - password does not verify
/// * `503 Service Unavailable` - database not configured
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(auth): State<AuthConfig>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;
    tracing::info!("Login request for: {}", request.username);

    let user = find_by_identifier(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            ApiError::UserNotFound
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::InvalidCredential);
    }

    let token = issue_token(&auth.jwt_secret, user.id, &user.username, auth.session_ttl)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        message: "user logged in successfully".to_string(),
        token,
        user: user.to_response(),
    }))
}
