//! API Route Handlers
//!
//! # Routes
//!
//! ## Authentication (public)
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//!
//! ## Authentication (gated)
//! - `GET /api/auth/me` - Get current user info
//!
//! ## Social graph (gated)
//! - `POST /api/users/follow/{username}` - Request to follow a user
//! - `POST /api/users/unfollow/{username}` - Remove a relationship
//! - `POST /api/users/accept/{username}` - Accept a pending request
//! - `POST /api/users/reject/{username}` - Reject a pending request
//! - `GET  /api/users/requests` - Pending incoming requests
//! - `GET  /api/users/{username}/followers` - Accepted followers
//! - `GET  /api/users/{username}/following` - Accepted followings
//!
//! Gated routes pass through the identity middleware; handlers receive
//! the verified identity from request extensions and never parse tokens
//! themselves.

use axum::{middleware, routing::get, routing::post, Router};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth::identity_middleware;
use crate::backend::server::state::AppState;
use crate::backend::social::{
    accept_follow_request, follow, list_follow_requests, list_followers, list_following,
    reject_follow_request, unfollow,
};

/// Configure API routes
///
/// The identity middleware is attached as a `route_layer` on the gated
/// subset only, so registration and login stay reachable without a
/// token.
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let gated = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/users/follow/{username}", post(follow))
        .route("/api/users/unfollow/{username}", post(unfollow))
        .route("/api/users/accept/{username}", post(accept_follow_request))
        .route("/api/users/reject/{username}", post(reject_follow_request))
        .route("/api/users/requests", get(list_follow_requests))
        .route("/api/users/{username}/followers", get(list_followers))
        .route("/api/users/{username}/following", get(list_following))
        .route_layer(middleware::from_fn_with_state(state, identity_middleware));

    router.merge(public).merge(gated)
}
