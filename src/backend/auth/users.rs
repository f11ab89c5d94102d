//! User Model and Database Operations
//!
//! The credential store. Uniqueness of username and email is enforced by
//! the database constraints, not by the lookups here — callers treat a
//! pre-insert existence check as advisory and handle the unique
//! violation from `create_user` as the authoritative answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::user::UserResponse;

/// Placeholder avatar assigned at registration when no image URL is given
pub const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://ik.imagekit.io/u9fcxeowj/avatar-gender-neutral-silhouette-vector-600nw-2470054311.webp";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Optional profile bio
    pub bio: Option<String>,
    /// Profile image URL
    pub profile_image_url: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Project to the client-safe view (drops the password hash)
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id.to_string(),
            username: self.username.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

/// Fields for creating a new user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Create a new user
///
/// Fails with a unique-violation database error when the username or
/// email is already taken; the handler maps that to an identity
/// conflict.
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let profile_image_url = new_user
        .profile_image_url
        .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE_URL.to_string());

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, bio, profile_image_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, username, email, password_hash, bio, profile_image_url, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.bio)
    .bind(&profile_image_url)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get a user by username or email in a single lookup
pub async fn find_by_identifier(
    pool: &PgPool,
    identifier: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, bio, profile_image_url, created_at, updated_at
        FROM users
        WHERE username = $1 OR email = $1
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, bio, profile_image_url, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, bio, profile_image_url, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, bio, profile_image_url, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a database error is the unique-constraint violation raised by
/// a concurrent insert of the same identifier
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    )
}
