//! Database operations for the follow graph
//!
//! One record per ordered (follower, followee) pair, enforced by the
//! unique constraint in the schema. Status transitions are the only
//! update path; unfollow deletes the record outright.

use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::shared::follow::{FollowRelationship, FollowStatus, FollowView};

fn relationship_from_row(row: &PgRow) -> FollowRelationship {
    FollowRelationship {
        id: row.get("id"),
        follower_id: row.get("follower_id"),
        followee_id: row.get("followee_id"),
        status: FollowStatus::from_str(row.get::<String, _>("status").as_str())
            .unwrap_or(FollowStatus::Pending),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a new follow relationship in `pending` status
///
/// Fails with a unique-violation database error when a record for the
/// pair already exists; the service layer decides what that means.
pub async fn create_follow(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<FollowRelationship, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO follows (id, follower_id, followee_id, status, created_at, updated_at)
        VALUES ($1, $2, $3, 'pending', $4, $4)
        "#,
    )
    .bind(id)
    .bind(follower_id)
    .bind(followee_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(FollowRelationship {
        id,
        follower_id,
        followee_id,
        status: FollowStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}

/// Get the relationship for an ordered (follower, followee) pair
pub async fn find_by_pair(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<Option<FollowRelationship>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, follower_id, followee_id, status, created_at, updated_at
        FROM follows
        WHERE follower_id = $1 AND followee_id = $2
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| relationship_from_row(&r)))
}

/// Delete a relationship record (unfollow), valid from any status
pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM follows WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Persist a status transition
pub async fn set_status(
    pool: &PgPool,
    id: Uuid,
    status: FollowStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE follows
        SET status = $1, updated_at = $2
        WHERE id = $3
        "#,
    )
    .bind(status.as_str())
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Pending incoming follow requests for a user, newest first, with
/// usernames resolved for presentation
pub async fn list_pending_for(
    pool: &PgPool,
    followee_id: Uuid,
) -> Result<Vec<FollowView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT f.id, f.follower_id, f.followee_id, f.status, f.created_at, f.updated_at,
               fu.username AS follower_username, tu.username AS followee_username
        FROM follows f
        INNER JOIN users fu ON fu.id = f.follower_id
        INNER JOIN users tu ON tu.id = f.followee_id
        WHERE f.followee_id = $1 AND f.status = 'pending'
        ORDER BY f.created_at DESC
        "#,
    )
    .bind(followee_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let record = relationship_from_row(&row);
            FollowView::from_record(
                record,
                row.get("follower_username"),
                row.get("followee_username"),
            )
        })
        .collect())
}

/// Usernames of users who follow `user_id` (accepted only)
pub async fn list_followers(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.username
        FROM follows f
        INNER JOIN users u ON u.id = f.follower_id
        WHERE f.followee_id = $1 AND f.status = 'accepted'
        ORDER BY u.username ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.get("username")).collect())
}

/// Usernames of users `user_id` follows (accepted only)
pub async fn list_following(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.username
        FROM follows f
        INNER JOIN users u ON u.id = f.followee_id
        WHERE f.follower_id = $1 AND f.status = 'accepted'
        ORDER BY u.username ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.get("username")).collect())
}

/// Whether a database error is the pair's unique-constraint violation
pub fn is_duplicate_pair(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    )
}
