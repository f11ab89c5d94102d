//! Backend Error Types
//!
//! One enum covers every expected failure the HTTP surface can report.
//! Each variant maps to a 4xx status except the infrastructure wrappers
//! at the bottom, which are 5xx and get logged before leaving the
//! process. None of these abort a request task; they are ordinary return
//! values.

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;

/// Errors reported by the auth and social-graph handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registration identifier (username or email) already taken
    #[error("{0}")]
    IdentityConflict(String),

    /// No user record for the given identifier
    #[error("user not found")]
    UserNotFound,

    /// Password verification failed for an existing user
    #[error("invalid password")]
    InvalidCredential,

    /// Request carried no usable credential
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Session token is past its expiry
    #[error("token expired")]
    TokenExpired,

    /// Session token is malformed or its signature does not verify
    #[error("unauthorized access, token unmatched")]
    TokenInvalid,

    /// Input failed validation
    #[error("{0}")]
    Validation(String),

    /// A user attempted to follow themselves
    #[error("you cannot follow yourself")]
    SelfFollowNotAllowed,

    /// Follow target does not exist
    #[error("user you are trying to follow does not exist")]
    TargetNotFound,

    /// A relationship already exists for this (follower, followee) pair
    #[error("relationship already exists")]
    DuplicateRelationship,

    /// No relationship exists for this (follower, followee) pair
    #[error("you are not following {0}")]
    RelationshipNotFound(String),

    /// No follow request from that user to the acting user
    #[error("request not found")]
    RequestNotFound,

    /// Acting user is not the followee of the request
    #[error("not authorized")]
    NotAuthorized,

    /// Follow request was already accepted or rejected
    #[error("already handled")]
    AlreadyHandled,

    /// Persistence service is not configured
    #[error("database not configured")]
    StoreUnavailable,

    /// Unexpected persistence failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token issuance failure
    #[error("token error: {0}")]
    TokenIssuance(#[from] jsonwebtoken::errors::Error),
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::TokenExpired,
            TokenError::Invalid => ApiError::TokenInvalid,
        }
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::IdentityConflict(_) | ApiError::DuplicateRelationship => {
                StatusCode::CONFLICT
            }
            ApiError::UserNotFound
            | ApiError::TargetNotFound
            | ApiError::RelationshipNotFound(_)
            | ApiError::RequestNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidCredential
            | ApiError::Unauthorized(_)
            | ApiError::TokenExpired
            | ApiError::TokenInvalid => StatusCode::UNAUTHORIZED,
            ApiError::NotAuthorized => StatusCode::FORBIDDEN,
            ApiError::Validation(_)
            | ApiError::SelfFollowNotAllowed
            | ApiError::AlreadyHandled => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) | ApiError::Hashing(_) | ApiError::TokenIssuance(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
