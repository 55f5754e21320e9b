//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{POST_COLUMNS, PostRow};
use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::domain::repositories::{FeedQuery, PostRepository};
use crate::error::AppError;

/// PostgreSQL repository for posts and the activity feed.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Post::from))
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let sql = format!(
            r#"
            WITH inserted AS (
                INSERT INTO posts (title, content, image_link, author_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT {POST_COLUMNS}
            FROM inserted p
            JOIN users u ON u.id = p.author_id
            "#
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(&new_post.title)
            .bind(&new_post.content)
            .bind(&new_post.image_link)
            .bind(new_post.author_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        self.fetch(id).await
    }

    async fn list_all(&self) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id \
             ORDER BY p.created_at DESC, p.id DESC"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let result = sqlx::query(
            "UPDATE posts SET title = $2, content = $3, image_link = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(&patch.image_link)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Post not found", json!({ "id": id })));
        }

        self.fetch(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_subscriber(
        &self,
        user_id: i64,
        query: FeedQuery,
    ) -> Result<Vec<Post>, AppError> {
        let direction = query.direction.as_sql();
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN users u ON u.id = p.author_id
            JOIN user_subscriptions s ON s.channel_id = p.author_id
            WHERE s.subscriber_id = $1
            ORDER BY p.created_at {direction}, p.id {direction}
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(user_id)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn count_by_subscriber(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts p
            JOIN user_subscriptions s ON s.channel_id = p.author_id
            WHERE s.subscriber_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
