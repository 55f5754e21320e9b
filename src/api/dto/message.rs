//! DTOs for private messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Message, UserSummary};

#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1 to 2000 characters"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub sender: UserSummary,
    pub receiver: UserSummary,
    pub content: String,
    #[serde(with = "super::date_format")]
    pub create_date: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender: message.sender,
            receiver: message.receiver,
            content: message.content,
            create_date: message.created_at,
        }
    }
}
