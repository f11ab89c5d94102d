//! Server Configuration
//!
//! Configuration is read from the environment exactly once, in `main`,
//! into an explicit [`ServerConfig`] that is handed to the rest of the
//! server. Business logic never reads ambient environment state.
//!
//! The signing secret is mandatory: without `JWT_SECRET` the process
//! refuses to start. The database is optional in development — handlers
//! answer 503 while it is absent.

use sqlx::PgPool;
use thiserror::Error;

/// Default session token lifetime in hours
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Configuration loading errors; all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}

/// Process-wide server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string; `None` disables database features
    pub database_url: Option<String>,
    /// Session token signing secret (required)
    pub jwt_secret: String,
    /// Session token lifetime
    pub session_ttl: chrono::Duration,
    /// HTTP listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is unset or `SERVER_PORT` does not parse;
    /// the caller exits the process on either.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        }

        let session_ttl_hours = std::env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            session_ttl: chrono::Duration::hours(session_ttl_hours),
            port,
        })
    }
}

/// Create the database connection pool and run migrations
///
/// Returns `None` when no URL is configured or the connection fails;
/// errors are logged and the server starts without database features.
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let database_url = config.database_url.as_ref()?;

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
