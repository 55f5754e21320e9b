//! Repository trait for private messages.

use crate::domain::entities::{Message, NewMessage};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, new_message: NewMessage) -> Result<Message, AppError>;

    /// Conversation between two users in both directions, oldest first.
    async fn history(&self, user_a: i64, user_b: i64) -> Result<Vec<Message>, AppError>;
}
