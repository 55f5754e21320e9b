//! Repository trait for posts and the activity feed.

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Ordering of the activity feed by creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `ASC` or `DESC`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Paging window over the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    pub direction: SortDirection,
    pub limit: i64,
    pub offset: i64,
}

/// Repository interface for posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists every post, newest first.
    async fn list_all(&self) -> Result<Vec<Post>, AppError>;

    /// Replaces the editable fields of a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError>;

    /// Deletes a post. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Posts written by channels the user subscribes to.
    async fn find_by_subscriber(
        &self,
        user_id: i64,
        query: FeedQuery,
    ) -> Result<Vec<Post>, AppError>;

    /// Total number of posts visible in the user's feed.
    async fn count_by_subscriber(&self, user_id: i64) -> Result<i64, AppError>;
}
