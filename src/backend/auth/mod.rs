//! Authentication and User Management
//!
//! Credential storage, password hashing, session tokens, and the auth
//! HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── users.rs     - User model and database operations
//! ├── password.rs  - bcrypt hashing and verification
//! ├── sessions.rs  - JWT issuance and verification
//! └── handlers/    - register / login / me endpoints
//! ```

/// User model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Session token issuance and verification
pub mod sessions;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{verify_token, Claims, TokenError};
