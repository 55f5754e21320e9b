//! Private message exchanged between two friends.

use chrono::{DateTime, Utc};

use super::user::UserSummary;

#[derive(Debug, Clone)]
pub struct Message {
    pub id: i64,
    pub sender: UserSummary,
    pub receiver: UserSummary,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}
