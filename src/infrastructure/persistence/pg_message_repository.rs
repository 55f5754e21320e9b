//! PostgreSQL implementation of the message repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{MESSAGE_COLUMNS, MessageRow};
use crate::domain::entities::{Message, NewMessage};
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;

pub struct PgMessageRepository {
    pool: Arc<PgPool>,
}

impl PgMessageRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, new_message: NewMessage) -> Result<Message, AppError> {
        let sql = format!(
            r#"
            WITH inserted AS (
                INSERT INTO messages (sender_id, receiver_id, content)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT {MESSAGE_COLUMNS}
            FROM inserted m
            JOIN users s ON s.id = m.sender_id
            JOIN users r ON r.id = m.receiver_id
            "#
        );

        let row = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(new_message.sender_id)
            .bind(new_message.receiver_id)
            .bind(&new_message.content)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn history(&self, user_a: i64, user_b: i64) -> Result<Vec<Message>, AppError> {
        let sql = format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages m
            JOIN users s ON s.id = m.sender_id
            JOIN users r ON r.id = m.receiver_id
            WHERE (m.sender_id = $1 AND m.receiver_id = $2)
               OR (m.sender_id = $2 AND m.receiver_id = $1)
            ORDER BY m.created_at ASC, m.id ASC
            "#
        );

        let rows = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(user_a)
            .bind(user_b)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
