//! Sanitized user projection.
//!
//! Everything that leaves the server about a user goes through
//! [`UserResponse`]. The password hash stays inside the credential store
//! and the auth handlers; it has no field here by construction.

use serde::{Deserialize, Serialize};

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
    /// Optional profile bio
    pub bio: Option<String>,
    /// Profile image URL (placeholder when the user never set one)
    pub profile_image_url: String,
}
