//! Shared Types
//!
//! Types shared between the HTTP surface and the persistence layer:
//! sanitized user projections and the follow-relationship data model.

/// Sanitized user projection
pub mod user;

/// Follow relationship model and request/response types
pub mod follow;

// Re-export commonly used types
pub use user::UserResponse;
pub use follow::{FollowDecision, FollowRelationship, FollowStatus, FollowView};
