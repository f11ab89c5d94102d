//! Social Graph HTTP Handlers
//!
//! Follow, unfollow, and the follow-request decisions, plus the
//! listings. All routes here sit behind the identity middleware; the
//! acting user arrives as a [`VerifiedIdentity`] and every authorization
//! decision is made against it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;

use crate::backend::auth::users::find_by_username;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{AuthUser, VerifiedIdentity};
use crate::shared::follow::{
    FollowDecision, FollowResponse, FollowView, ListFollowRequestsResponse,
    ListUsernamesResponse,
};

use super::db;

/// Request to follow a user
///
/// Creates a pending relationship, or returns the existing one
/// unchanged — re-following is idempotent, never an error and never a
/// duplicate record.
///
/// # Errors
///
/// * `400 Bad Request` - attempting to follow yourself
/// * `404 Not Found` - target user does not exist
pub async fn follow(
    State(pool): State<Option<PgPool>>,
    AuthUser(identity): AuthUser,
    Path(username): Path<String>,
) -> Result<(StatusCode, Json<FollowResponse>), ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    if identity.username == username {
        return Err(ApiError::SelfFollowNotAllowed);
    }

    let target = find_by_username(&pool, &username)
        .await?
        .ok_or(ApiError::TargetNotFound)?;

    if let Some(existing) = db::find_by_pair(&pool, identity.user_id, target.id).await? {
        return Ok((
            StatusCode::OK,
            Json(FollowResponse {
                message: format!("you are already following {}", target.username),
                follow: Some(FollowView::from_record(
                    existing,
                    identity.username,
                    target.username,
                )),
            }),
        ));
    }

    let record = match db::create_follow(&pool, identity.user_id, target.id).await {
        Ok(record) => record,
        // A concurrent follow for the same pair won the insert; honor the
        // idempotence contract by returning its record.
        Err(e) if db::is_duplicate_pair(&e) => {
            let existing = db::find_by_pair(&pool, identity.user_id, target.id)
                .await?
                .ok_or(ApiError::DuplicateRelationship)?;
            return Ok((
                StatusCode::OK,
                Json(FollowResponse {
                    message: format!("you are already following {}", target.username),
                    follow: Some(FollowView::from_record(
                        existing,
                        identity.username,
                        target.username,
                    )),
                }),
            ));
        }
        Err(e) => return Err(ApiError::Database(e)),
    };

    tracing::info!(
        "Follow request created: {} -> {}",
        identity.username,
        target.username
    );

    Ok((
        StatusCode::CREATED,
        Json(FollowResponse {
            message: format!("you are following {}", target.username),
            follow: Some(FollowView::from_record(
                record,
                identity.username,
                target.username,
            )),
        }),
    ))
}

/// Remove a follow relationship
///
/// Deletes the record regardless of its status.
///
/// # Errors
///
/// * `404 Not Found` - no relationship with that user
pub async fn unfollow(
    State(pool): State<Option<PgPool>>,
    AuthUser(identity): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<FollowResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    let target = find_by_username(&pool, &username)
        .await?
        .ok_or_else(|| ApiError::RelationshipNotFound(username.clone()))?;

    let record = db::find_by_pair(&pool, identity.user_id, target.id)
        .await?
        .ok_or_else(|| ApiError::RelationshipNotFound(username.clone()))?;

    let deleted = db::delete_by_id(&pool, record.id).await?;
    if deleted == 0 {
        return Err(ApiError::RelationshipNotFound(username));
    }

    tracing::info!("{} unfollowed {}", identity.username, target.username);

    Ok(Json(FollowResponse {
        message: format!("you have unfollowed {}", target.username),
        follow: None,
    }))
}

/// Accept a pending follow request from `{username}`
pub async fn accept_follow_request(
    State(pool): State<Option<PgPool>>,
    AuthUser(identity): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<FollowResponse>, ApiError> {
    respond_to_follow_request(pool, identity, username, FollowDecision::Accept).await
}

/// Reject a pending follow request from `{username}`
pub async fn reject_follow_request(
    State(pool): State<Option<PgPool>>,
    AuthUser(identity): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<FollowResponse>, ApiError> {
    respond_to_follow_request(pool, identity, username, FollowDecision::Reject).await
}

/// Shared accept/reject path
///
/// Error order is part of the contract: unknown request (404), then
/// authorization (403), then already-handled (400). Only the followee of
/// a pending request may decide it, and a terminal status is never
/// touched again.
async fn respond_to_follow_request(
    pool: Option<PgPool>,
    identity: VerifiedIdentity,
    follower_username: String,
    decision: FollowDecision,
) -> Result<Json<FollowResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    let follower = find_by_username(&pool, &follower_username)
        .await?
        .ok_or(ApiError::RequestNotFound)?;

    let mut record = db::find_by_pair(&pool, follower.id, identity.user_id)
        .await?
        .ok_or(ApiError::RequestNotFound)?;

    // The pair lookup already scopes to the acting user; keep the
    // explicit check so a lookup change cannot widen who may decide.
    if record.followee_id != identity.user_id {
        return Err(ApiError::NotAuthorized);
    }

    let new_status = record
        .status
        .transition(decision)
        .ok_or(ApiError::AlreadyHandled)?;

    db::set_status(&pool, record.id, new_status).await?;
    record.status = new_status;
    record.updated_at = chrono::Utc::now();

    let message = match decision {
        FollowDecision::Accept => "follow request accepted",
        FollowDecision::Reject => "follow request rejected",
    };

    tracing::info!(
        "{}: {} -> {}",
        message,
        follower.username,
        identity.username
    );

    Ok(Json(FollowResponse {
        message: message.to_string(),
        follow: Some(FollowView::from_record(
            record,
            follower.username,
            identity.username,
        )),
    }))
}

/// List pending incoming follow requests for the current user
pub async fn list_follow_requests(
    State(pool): State<Option<PgPool>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ListFollowRequestsResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    let requests = db::list_pending_for(&pool, identity.user_id).await?;

    Ok(Json(ListFollowRequestsResponse { requests }))
}

/// List usernames following `{username}` (accepted relationships)
pub async fn list_followers(
    State(pool): State<Option<PgPool>>,
    AuthUser(_identity): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ListUsernamesResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    let user = find_by_username(&pool, &username)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let users = db::list_followers(&pool, user.id).await?;

    Ok(Json(ListUsernamesResponse { users }))
}

/// List usernames `{username}` follows (accepted relationships)
pub async fn list_following(
    State(pool): State<Option<PgPool>>,
    AuthUser(_identity): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ListUsernamesResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::StoreUnavailable)?;

    let user = find_by_username(&pool, &username)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let users = db::list_following(&pool, user.id).await?;

    Ok(Json(ListUsernamesResponse { users }))
}
