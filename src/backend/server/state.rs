//! Application State Management
//!
//! [`AppState`] is the central state container: the optional database
//! pool and the auth configuration (signing secret, session TTL). The
//! `FromRef` implementations let handlers extract just the part they
//! need instead of the whole state.

use axum::extract::FromRef;
use sqlx::PgPool;

use super::config::ServerConfig;

/// Auth configuration shared by the token codec call sites
#[derive(Clone)]
pub struct AuthConfig {
    /// Session token signing secret
    pub jwt_secret: String,
    /// Validity window for issued tokens
    pub session_ttl: chrono::Duration,
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when not configured
    pub db_pool: Option<PgPool>,
    /// Auth configuration
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(db_pool: Option<PgPool>, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            auth: AuthConfig {
                jwt_secret: config.jwt_secret.clone(),
                session_ttl: config.session_ttl,
            },
        }
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
