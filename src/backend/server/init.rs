//! Server Initialization
//!
//! Builds the application from a loaded [`ServerConfig`]:
//! connect the database (if configured), assemble [`AppState`], and
//! hand it to the router.

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Missing database means the server still starts; store-backed routes
/// answer 503 until it is configured. A missing signing secret never
/// reaches this point — config loading fails first.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing xfsocial backend server");

    let db_pool = load_database(config).await;

    let app_state = AppState::new(db_pool, config);

    create_router(app_state)
}
