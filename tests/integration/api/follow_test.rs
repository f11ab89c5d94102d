//! Follow graph API integration tests
//!
//! The relationship lifecycle against a real store: idempotent follow,
//! unfollow-as-delete, and the pending → accepted/rejected state
//! machine. Ignored by default (needs PostgreSQL):
//!
//! ```text
//! cargo test -- --ignored
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pretty_assertions::assert_eq;
use serial_test::serial;
use sqlx::PgPool;

use xfsocial::backend::auth::users::User;
use xfsocial::backend::error::ApiError;
use xfsocial::backend::middleware::auth::AuthUser;
use xfsocial::backend::social::{
    accept_follow_request, follow, list_follow_requests, list_followers, list_following,
    reject_follow_request, unfollow,
};
use xfsocial::shared::follow::FollowStatus;

use crate::common::auth_helpers::{create_test_user, identity_for, unique_username};
use crate::common::database::TestDatabase;

async fn two_users(pool: &PgPool) -> (User, User) {
    let alice_name = unique_username("alice");
    let bob_name = unique_username("bob");
    let alice = create_test_user(
        pool,
        &alice_name,
        &format!("{}@example.com", alice_name),
        "password123",
    )
    .await
    .unwrap();
    let bob = create_test_user(
        pool,
        &bob_name,
        &format!("{}@example.com", bob_name),
        "password123",
    )
    .await
    .unwrap();
    (alice, bob)
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_follow_creates_pending() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    let (status, Json(body)) = follow(
        State(pool),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .expect("follow should succeed");

    assert_eq!(status, StatusCode::CREATED);
    let record = body.follow.expect("response carries the relationship");
    assert_eq!(record.status, FollowStatus::Pending);
    assert_eq!(record.follower, alice.username);
    assert_eq!(record.followee, bob.username);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_follow_twice_is_idempotent() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    let (first_status, Json(first)) = follow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();

    let (second_status, Json(second)) = follow(
        State(pool),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .expect("re-follow must not error");

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::OK);
    // Same record, no duplicate
    assert_eq!(
        first.follow.unwrap().id,
        second.follow.unwrap().id
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_self_follow_rejected() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, _) = two_users(db.pool()).await;

    let result = follow(
        State(pool),
        AuthUser(identity_for(&alice)),
        Path(alice.username.clone()),
    )
    .await;

    let err = result.err().expect("self-follow must fail");
    assert!(matches!(err, ApiError::SelfFollowNotAllowed));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_follow_unknown_target() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, _) = two_users(db.pool()).await;

    let result = follow(
        State(pool),
        AuthUser(identity_for(&alice)),
        Path(unique_username("missing")),
    )
    .await;

    let err = result.err().expect("unknown target must fail");
    assert!(matches!(err, ApiError::TargetNotFound));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_unfollow_deletes_from_any_status() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    follow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();

    // Accepted status is no barrier to unfollow
    accept_follow_request(
        State(pool.clone()),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await
    .unwrap();

    let result = unfollow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await;
    assert!(result.is_ok());

    // The record is gone, not transitioned
    let again = unfollow(
        State(pool),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await;
    let err = again.err().expect("second unfollow must fail");
    assert!(matches!(err, ApiError::RelationshipNotFound(_)));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_accept_then_accept_again() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    follow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();

    let Json(body) = accept_follow_request(
        State(pool.clone()),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await
    .expect("accept should succeed");
    assert_eq!(body.follow.unwrap().status, FollowStatus::Accepted);

    let again = accept_follow_request(
        State(pool),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await;
    let err = again.err().expect("second accept must fail");
    assert!(matches!(err, ApiError::AlreadyHandled));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_reject_is_terminal() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    follow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();

    let Json(body) = reject_follow_request(
        State(pool.clone()),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await
    .expect("reject should succeed");
    assert_eq!(body.follow.unwrap().status, FollowStatus::Rejected);

    // No transition out of rejected, not even accept
    let flip = accept_follow_request(
        State(pool),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await;
    assert!(matches!(flip, Err(ApiError::AlreadyHandled)));
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_accept_without_request() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    let result = accept_follow_request(
        State(pool),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await;

    let err = result.err().expect("no request to accept");
    assert!(matches!(err, ApiError::RequestNotFound));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_bystander_cannot_accept() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;
    let charlie_name = unique_username("charlie");
    let charlie = create_test_user(
        db.pool(),
        &charlie_name,
        &format!("{}@example.com", charlie_name),
        "password123",
    )
    .await
    .unwrap();

    follow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();

    // Charlie is not the followee of alice's request; there is no
    // (alice, charlie) pair to act on
    let result = accept_follow_request(
        State(pool.clone()),
        AuthUser(identity_for(&charlie)),
        Path(alice.username.clone()),
    )
    .await;
    assert!(result.is_err());

    // And bob's pending request is untouched
    let Json(requests) = list_follow_requests(State(pool), AuthUser(identity_for(&bob)))
        .await
        .unwrap();
    assert_eq!(requests.requests.len(), 1);
    assert_eq!(requests.requests[0].status, FollowStatus::Pending);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
async fn test_listings_show_accepted_only() {
    let db = TestDatabase::new().await;
    let pool = Some(db.pool().clone());
    let (alice, bob) = two_users(db.pool()).await;

    follow(
        State(pool.clone()),
        AuthUser(identity_for(&alice)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();

    // Pending: visible as a request, absent from the listings
    let Json(requests) = list_follow_requests(State(pool.clone()), AuthUser(identity_for(&bob)))
        .await
        .unwrap();
    assert_eq!(requests.requests.len(), 1);
    assert_eq!(requests.requests[0].follower, alice.username);

    let Json(followers) = list_followers(
        State(pool.clone()),
        AuthUser(identity_for(&bob)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();
    assert!(followers.users.is_empty());

    accept_follow_request(
        State(pool.clone()),
        AuthUser(identity_for(&bob)),
        Path(alice.username.clone()),
    )
    .await
    .unwrap();

    let Json(followers) = list_followers(
        State(pool.clone()),
        AuthUser(identity_for(&bob)),
        Path(bob.username.clone()),
    )
    .await
    .unwrap();
    assert_eq!(followers.users, vec![alice.username.clone()]);

    let Json(following) = list_following(
        State(pool),
        AuthUser(identity_for(&alice)),
        Path(alice.username.clone()),
    )
    .await
    .unwrap();
    assert_eq!(following.users, vec![bob.username.clone()]);
}
