//! Authentication Handler Types
//!
//! Request and response types shared across the register, login, and
//! get_me handlers.

use serde::{Deserialize, Serialize};

use crate::shared::user::UserResponse;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Optional profile bio
    #[serde(default)]
    pub bio: Option<String>,
    /// Optional profile image URL (placeholder assigned when omitted)
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Login request
///
/// `username` also accepts an email address; the store lookup matches
/// either column.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Username or email
    pub username: String,
    /// Password to verify against the stored hash
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Carries the session token and the
/// sanitized user view.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    /// Session token for the Authorization header
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// Response for GET /api/auth/me
#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: UserResponse,
}
