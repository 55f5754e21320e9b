//! PostgreSQL implementation of the subscription repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Subscription, UserSummary};
use crate::domain::repositories::SubscriptionRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `user_subscriptions` table.
pub struct PgSubscriptionRepository {
    pool: Arc<PgPool>,
}

impl PgSubscriptionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    async fn find(
        &self,
        channel_id: i64,
        subscriber_id: i64,
    ) -> Result<Option<Subscription>, AppError> {
        let row = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT channel_id, subscriber_id, active, created_at
            FROM user_subscriptions
            WHERE channel_id = $1 AND subscriber_id = $2
            "#,
        )
        .bind(channel_id)
        .bind(subscriber_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(
        &self,
        channel_id: i64,
        subscriber_id: i64,
        active: bool,
    ) -> Result<Subscription, AppError> {
        let row = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO user_subscriptions (channel_id, subscriber_id, active)
            VALUES ($1, $2, $3)
            ON CONFLICT (channel_id, subscriber_id) DO UPDATE SET active = EXCLUDED.active
            RETURNING channel_id, subscriber_id, active, created_at
            "#,
        )
        .bind(channel_id)
        .bind(subscriber_id)
        .bind(active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn set_active(
        &self,
        channel_id: i64,
        subscriber_id: i64,
        active: bool,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE user_subscriptions SET active = $3 WHERE channel_id = $1 AND subscriber_id = $2",
        )
        .bind(channel_id)
        .bind(subscriber_id)
        .bind(active)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, channel_id: i64, subscriber_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "DELETE FROM user_subscriptions WHERE channel_id = $1 AND subscriber_id = $2",
        )
        .bind(channel_id)
        .bind(subscriber_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn channels_of(&self, subscriber_id: i64) -> Result<Vec<UserSummary>, AppError> {
        let rows = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.name
            FROM user_subscriptions s
            JOIN users u ON u.id = s.channel_id
            WHERE s.subscriber_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn subscribers_of(&self, channel_id: i64) -> Result<Vec<UserSummary>, AppError> {
        let rows = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.name
            FROM user_subscriptions s
            JOIN users u ON u.id = s.subscriber_id
            WHERE s.channel_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(channel_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
