//! Row types shared by the PostgreSQL repositories.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Message, Post, Role, User, UserSummary};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|reason: String| {
            AppError::internal("Corrupted user record", json!({ "reason": reason }))
        })?;

        Ok(User::new(
            row.id,
            row.email,
            row.name,
            row.password_hash,
            role,
            row.created_at,
        ))
    }
}

/// Post joined with its author's name.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PostRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_link: Option<String>,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post::new(
            row.id,
            row.title,
            row.content,
            row.image_link,
            UserSummary {
                id: row.author_id,
                name: row.author_name,
            },
            row.created_at,
        )
    }
}

/// Message joined with both participants' names.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct MessageRow {
    pub id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub receiver_id: i64,
    pub receiver_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            sender: UserSummary {
                id: row.sender_id,
                name: row.sender_name,
            },
            receiver: UserSummary {
                id: row.receiver_id,
                name: row.receiver_name,
            },
            content: row.content,
            created_at: row.created_at,
        }
    }
}

/// Column list matching [`PostRow`], for queries aliasing `posts` as `p` and `users` as `u`.
pub(crate) const POST_COLUMNS: &str = "p.id, p.title, p.content, p.image_link, \
     p.author_id, u.name AS author_name, p.created_at";

pub(crate) const MESSAGE_COLUMNS: &str = "m.id, m.sender_id, s.name AS sender_name, \
     m.receiver_id, r.name AS receiver_name, m.content, m.created_at";
