//! xfsocial - Main Library
//!
//! A social backend built on Axum and PostgreSQL: account registration
//! and login with bcrypt-hashed credentials, JWT session tokens, and a
//! follow graph with a pending/accepted/rejected request lifecycle.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the HTTP surface and the
//!   persistence layer (sanitized user views, follow data model)
//! - **`backend`** - The Axum server: auth, social graph, middleware,
//!   routing, state, and error handling
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfsocial::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let config = ServerConfig::from_env().expect("configuration");
//! let app = create_app(&config).await;
//! // Serve `app` with axum
//! # }
//! ```

/// Types shared across the crate
pub mod shared;

/// Server-side code
pub mod backend;
