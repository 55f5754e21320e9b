//! Repository trait for friendships.

use crate::domain::entities::UserSummary;
use crate::error::AppError;
use async_trait::async_trait;

/// Friendships are symmetric: argument order never matters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Records a friendship. Adding an existing pair is a no-op.
    async fn add(&self, user_a: i64, user_b: i64) -> Result<(), AppError>;

    /// Removes a friendship if present.
    async fn remove(&self, user_a: i64, user_b: i64) -> Result<(), AppError>;

    async fn are_friends(&self, user_a: i64, user_b: i64) -> Result<bool, AppError>;

    async fn friends_of(&self, user_id: i64) -> Result<Vec<UserSummary>, AppError>;
}
