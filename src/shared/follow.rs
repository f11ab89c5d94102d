//! Follow Relationship Data Structures
//!
//! Represents directed follow relationships between users and their
//! request lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a follow relationship
///
/// `Pending` is the only state a relationship is created in. It can move
/// to `Accepted` or `Rejected` exactly once; both are terminal. Removing
/// a relationship (unfollow) deletes the record instead of transitioning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FollowStatus {
    /// Request is awaiting the followee's decision
    Pending,
    /// Request was accepted
    Accepted,
    /// Request was rejected
    Rejected,
}

impl Default for FollowStatus {
    fn default() -> Self {
        FollowStatus::Pending
    }
}

impl FollowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowStatus::Pending => "pending",
            FollowStatus::Accepted => "accepted",
            FollowStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(FollowStatus::Pending),
            "accepted" => Some(FollowStatus::Accepted),
            "rejected" => Some(FollowStatus::Rejected),
            _ => None,
        }
    }

    /// Apply the followee's decision to this status.
    ///
    /// Returns the resulting status, or `None` when the relationship has
    /// already been handled (not pending) — the caller reports that case,
    /// the status is never mutated.
    pub fn transition(self, decision: FollowDecision) -> Option<FollowStatus> {
        match self {
            FollowStatus::Pending => Some(match decision {
                FollowDecision::Accept => FollowStatus::Accepted,
                FollowDecision::Reject => FollowStatus::Rejected,
            }),
            _ => None,
        }
    }
}

/// The followee's decision on a pending follow request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowDecision {
    Accept,
    Reject,
}

/// A directed follow relationship record
///
/// References users by their stable internal ids; usernames are resolved
/// at the response boundary so a future username change cannot orphan the
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowRelationship {
    /// Unique relationship ID
    pub id: Uuid,
    /// User who requested the follow
    pub follower_id: Uuid,
    /// User being followed
    pub followee_id: Uuid,
    /// Current lifecycle status
    #[serde(default)]
    pub status: FollowStatus,
    /// When the request was created
    pub created_at: DateTime<Utc>,
    /// When the status last changed
    pub updated_at: DateTime<Utc>,
}

impl FollowRelationship {
    /// Check if the relationship is awaiting a decision
    pub fn is_pending(&self) -> bool {
        self.status == FollowStatus::Pending
    }
}

/// Follow relationship as presented to clients (usernames, not ids)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowView {
    pub id: Uuid,
    pub follower: String,
    pub followee: String,
    pub status: FollowStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FollowView {
    /// Attach usernames to a relationship record
    pub fn from_record(record: FollowRelationship, follower: String, followee: String) -> Self {
        Self {
            id: record.id,
            follower,
            followee,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Response for follow / unfollow / accept / reject endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct FollowResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow: Option<FollowView>,
}

/// Response for the pending-requests listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ListFollowRequestsResponse {
    pub requests: Vec<FollowView>,
}

/// Response for follower / following listings
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsernamesResponse {
    pub users: Vec<String>,
}
