//! PostgreSQL implementation of the friendship repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{FriendPair, UserSummary};
use crate::domain::repositories::FriendshipRepository;
use crate::error::AppError;

/// Stores each friendship once as `(user_low, user_high)`.
pub struct PgFriendshipRepository {
    pool: Arc<PgPool>,
}

impl PgFriendshipRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    async fn add(&self, user_a: i64, user_b: i64) -> Result<(), AppError> {
        let pair = FriendPair::new(user_a, user_b);

        sqlx::query(
            r#"
            INSERT INTO friendships (user_low, user_high)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(pair.low)
        .bind(pair.high)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn remove(&self, user_a: i64, user_b: i64) -> Result<(), AppError> {
        let pair = FriendPair::new(user_a, user_b);

        sqlx::query("DELETE FROM friendships WHERE user_low = $1 AND user_high = $2")
            .bind(pair.low)
            .bind(pair.high)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn are_friends(&self, user_a: i64, user_b: i64) -> Result<bool, AppError> {
        let pair = FriendPair::new(user_a, user_b);

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM friendships WHERE user_low = $1 AND user_high = $2)",
        )
        .bind(pair.low)
        .bind(pair.high)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn friends_of(&self, user_id: i64) -> Result<Vec<UserSummary>, AppError> {
        let rows = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.name
            FROM friendships f
            JOIN users u
              ON u.id = CASE WHEN f.user_low = $1 THEN f.user_high ELSE f.user_low END
            WHERE f.user_low = $1 OR f.user_high = $1
            ORDER BY u.name
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
