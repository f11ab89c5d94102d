//! Authentication HTTP Handlers
//!
//! Register, login, and current-user endpoints.

/// Request/response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
