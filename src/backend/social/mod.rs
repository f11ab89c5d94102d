//! Social Graph
//!
//! Follow relationships and their request lifecycle.
//!
//! # Module Structure
//!
//! ```text
//! social/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Follow graph database operations
//! └── handlers.rs  - Follow/unfollow/accept/reject endpoints
//! ```

/// Follow graph database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    accept_follow_request, follow, list_follow_requests, list_followers, list_following,
    reject_follow_request, unfollow,
};
