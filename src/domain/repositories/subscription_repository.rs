//! Repository trait for follow relationships.

use crate::domain::entities::{Subscription, UserSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for subscriptions, keyed by `(channel_id, subscriber_id)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSubscriptionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find(
        &self,
        channel_id: i64,
        subscriber_id: i64,
    ) -> Result<Option<Subscription>, AppError>;

    async fn create(
        &self,
        channel_id: i64,
        subscriber_id: i64,
        active: bool,
    ) -> Result<Subscription, AppError>;

    /// Returns `Ok(false)` if the subscription does not exist.
    async fn set_active(
        &self,
        channel_id: i64,
        subscriber_id: i64,
        active: bool,
    ) -> Result<bool, AppError>;

    /// Returns `Ok(false)` if the subscription does not exist.
    async fn delete(&self, channel_id: i64, subscriber_id: i64) -> Result<bool, AppError>;

    /// Channels the user follows.
    async fn channels_of(&self, subscriber_id: i64) -> Result<Vec<UserSummary>, AppError>;

    /// Users following the channel.
    async fn subscribers_of(&self, channel_id: i64) -> Result<Vec<UserSummary>, AppError>;
}
