//! Post entity published by a user.

use chrono::{DateTime, Utc};

use super::user::UserSummary;

/// Maximum number of characters accepted in a post body.
pub const MAX_CONTENT_LENGTH: usize = 5000;

/// A post together with its author.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// File name of the attached image inside the upload directory.
    pub image_link: Option<String>,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: i64,
        title: String,
        content: String,
        image_link: Option<String>,
        author: UserSummary,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image_link,
            author,
            created_at,
        }
    }

    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author.id == user_id
    }
}

/// Input data for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image_link: Option<String>,
    pub author_id: i64,
}

/// Full replacement of the editable fields of a post.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
    pub image_link: Option<String>,
}
