//! Registration Handler
//!
//! POST /api/auth/register
//!
//! # Registration Process
//!
//! 1. Validate username format, email format, and password length
//! 2. Check whether the username or email is already taken (advisory;
//!    the unique constraints decide under concurrency)
//! 3. Hash the password with bcrypt
//! 4. Create the user record
//! 5. Issue a session token bound to the new identity
//!
//! The password hash never appears in the response.

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::sessions::issue_token;
use crate::backend::auth::users::{self, NewUser};
use crate::backend::error::ApiError;
use crate::backend::server::state::AuthConfig;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Register handler
///
/// Creates a new account and returns a session token for immediate use.
///
/// # Errors
///
/// * `400 Bad Request` - invalid username/email format or short password
/// * `409 Conflict` - username or email already registered
/// * `503 Service Unavailable` - database not configured
pub async fn register(
    State(pool): State<Option<PgPool>>,
    State(auth): State<AuthConfig>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;
    tracing::info!(
        "Register request for username: {}, email: {}",
        request.username,
        request.email
    );

    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(ApiError::Validation(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores".to_string(),
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Advisory existence checks; give the caller a field-specific message
    if users::find_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::IdentityConflict(
            "username already exists".to_string(),
        ));
    }

    if users::find_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::IdentityConflict("email already exists".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = users::create_user(
        &pool,
        NewUser {
            username: request.username.clone(),
            email: request.email.clone(),
            password_hash,
            bio: request.bio,
            profile_image_url: request.profile_image_url,
        },
    )
    .await
    .map_err(|e| {
        // The constraint is authoritative: a concurrent registration can
        // slip past the advisory checks above.
        if users::is_unique_violation(&e) {
            tracing::warn!("Registration lost a uniqueness race: {}", request.username);
            ApiError::IdentityConflict("user already exists".to_string())
        } else {
            ApiError::Database(e)
        }
    })?;

    let token = issue_token(&auth.jwt_secret, user.id, &user.username, auth.session_ttl)?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "user registered successfully".to_string(),
            token,
            user: user.to_response(),
        }),
    ))
}
