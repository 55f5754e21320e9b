//! DTOs for posts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Post, UserSummary};

/// Post as returned by the API. Images are served from `/img/{image_link}`.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_link: Option<String>,
    pub author: UserSummary,
    #[serde(with = "super::date_format")]
    pub create_date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            image_link: post.image_link,
            author: post.author,
            create_date: post.created_at,
        }
    }
}
