//! Middleware for request processing

/// Identity verification middleware
pub mod auth;

pub use auth::{identity_middleware, AuthUser, VerifiedIdentity};
