//! Post publishing, editing and the activity feed.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{MAX_CONTENT_LENGTH, NewPost, Post, PostPatch, User};
use crate::domain::repositories::{FeedQuery, PostRepository, SortDirection};
use crate::error::AppError;
use crate::infrastructure::storage::{ImageStorage, image_extension};

/// Text fields of a post submitted through a form.
#[derive(Debug, Clone)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// Image file attached to a post form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One page of the activity feed.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub content: Vec<Post>,
    pub page: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

/// Service for managing posts and their images.
///
/// Only the author of a post or an administrator may modify or delete it.
pub struct PostService<P: PostRepository> {
    repository: Arc<P>,
    storage: Arc<dyn ImageStorage>,
}

impl<P: PostRepository> PostService<P> {
    pub fn new(repository: Arc<P>, storage: Arc<dyn ImageStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, AppError> {
        self.repository.list_all().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn get(&self, id: i64) -> Result<Post, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| post_not_found(id))
    }

    /// Publishes a post, storing the optional image first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank title or content, content over
    /// the length limit, or an image that is not JPG, JPEG or PNG.
    pub async fn create(
        &self,
        author: &User,
        form: PostForm,
        image: Option<ImageUpload>,
    ) -> Result<Post, AppError> {
        validate_form(&form)?;
        let extension = image.as_ref().map(checked_extension).transpose()?;

        let image_link = match (image, extension) {
            (Some(upload), Some(ext)) => Some(self.storage.save(&ext, upload.bytes).await?),
            _ => None,
        };

        let result = self
            .repository
            .create(NewPost {
                title: form.title,
                content: form.content,
                image_link: image_link.clone(),
                author_id: author.id,
            })
            .await;

        if result.is_err() {
            if let Some(name) = &image_link {
                self.discard_image(name).await;
            }
        }

        let post = result?;
        info!(post_id = post.id, author_id = author.id, "Post created");

        Ok(post)
    }

    /// Replaces the title and content of a post.
    ///
    /// A new image replaces the stored one; without it the existing image is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist and
    /// [`AppError::Forbidden`] if `actor` is neither the author nor an administrator.
    pub async fn update(
        &self,
        id: i64,
        actor: &User,
        form: PostForm,
        image: Option<ImageUpload>,
    ) -> Result<Post, AppError> {
        let existing = self.get(id).await?;
        ensure_can_modify(&existing, actor)?;
        validate_form(&form)?;
        let extension = image.as_ref().map(checked_extension).transpose()?;

        let new_image = match (image, extension) {
            (Some(upload), Some(ext)) => Some(self.storage.save(&ext, upload.bytes).await?),
            _ => None,
        };

        let patch = PostPatch {
            title: form.title,
            content: form.content,
            image_link: new_image.clone().or_else(|| existing.image_link.clone()),
        };

        let updated = match self.repository.update(id, patch).await {
            Ok(post) => post,
            Err(e) => {
                if let Some(name) = &new_image {
                    self.discard_image(name).await;
                }
                return Err(e);
            }
        };

        if new_image.is_some() {
            if let Some(old) = &existing.image_link {
                self.discard_image(old).await;
            }
        }

        Ok(updated)
    }

    /// Deletes a post and its stored image.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update`].
    pub async fn delete(&self, id: i64, actor: &User) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        ensure_can_modify(&existing, actor)?;

        if !self.repository.delete(id).await? {
            return Err(post_not_found(id));
        }

        if let Some(name) = &existing.image_link {
            self.discard_image(name).await;
        }

        info!(post_id = id, actor_id = actor.id, "Post deleted");

        Ok(())
    }

    /// Posts from channels the user follows, paged with a zero-based page number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `sort_type` is missing or not `ASC`/`DESC`,
    /// `page` is negative, or `page_size` is not positive.
    pub async fn feed(
        &self,
        user_id: i64,
        sort_type: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<FeedPage, AppError> {
        let direction = sort_type.and_then(SortDirection::parse).ok_or_else(|| {
            AppError::bad_request(
                "Invalid sortType value! Must be 'DESC' or 'ASC'",
                json!({ "sortType": sort_type }),
            )
        })?;

        if page < 0 {
            return Err(AppError::bad_request(
                "Page number must be non-negative",
                json!({ "page": page }),
            ));
        }

        if page_size <= 0 {
            return Err(AppError::bad_request(
                "Page size must be positive",
                json!({ "pageSize": page_size }),
            ));
        }

        let offset = page.checked_mul(page_size).ok_or_else(|| {
            AppError::bad_request("Page number is too large", json!({ "page": page }))
        })?;

        let total_elements = self.repository.count_by_subscriber(user_id).await?;
        let content = self
            .repository
            .find_by_subscriber(
                user_id,
                FeedQuery {
                    direction,
                    limit: page_size,
                    offset,
                },
            )
            .await?;

        Ok(FeedPage {
            content,
            page,
            page_size,
            total_elements,
            total_pages: page_count(total_elements, page_size),
        })
    }

    async fn discard_image(&self, name: &str) {
        if let Err(e) = self.storage.delete(name).await {
            warn!(file = %name, error = %e, "Failed to delete stored image");
        }
    }
}

fn page_count(total_elements: i64, page_size: i64) -> i64 {
    if total_elements <= 0 {
        0
    } else {
        (total_elements - 1) / page_size + 1
    }
}

fn post_not_found(id: i64) -> AppError {
    AppError::not_found("Post not found", json!({ "id": id }))
}

fn ensure_can_modify(post: &Post, actor: &User) -> Result<(), AppError> {
    if post.is_authored_by(actor.id) || actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "Access denied. Only the author can modify or delete the post",
            json!({ "post_id": post.id }),
        ))
    }
}

fn validate_form(form: &PostForm) -> Result<(), AppError> {
    if form.title.trim().is_empty() {
        return Err(AppError::bad_request(
            "Title can not be empty",
            json!({ "field": "title" }),
        ));
    }

    if form.content.trim().is_empty() {
        return Err(AppError::bad_request(
            "Content can not be empty",
            json!({ "field": "content" }),
        ));
    }

    if form.content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(AppError::bad_request(
            format!("Content must be at most {} characters", MAX_CONTENT_LENGTH),
            json!({ "field": "content" }),
        ));
    }

    Ok(())
}

fn checked_extension(upload: &ImageUpload) -> Result<String, AppError> {
    image_extension(&upload.file_name).ok_or_else(|| {
        AppError::bad_request(
            "Invalid image format. Only JPG, JPEG, and PNG formats are allowed",
            json!({ "file_name": upload.file_name }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::user_service::tests::test_user;
    use crate::domain::entities::{Role, UserSummary};
    use crate::domain::repositories::MockPostRepository;
    use crate::infrastructure::storage::MockImageStorage;
    use chrono::Utc;

    fn test_post(id: i64, author_id: i64, image_link: Option<&str>) -> Post {
        Post::new(
            id,
            "Title".to_string(),
            "Content".to_string(),
            image_link.map(str::to_string),
            UserSummary {
                id: author_id,
                name: format!("user{}", author_id),
            },
            Utc::now(),
        )
    }

    fn form(title: &str, content: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn upload(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    fn service(repo: MockPostRepository, storage: MockImageStorage) -> PostService<MockPostRepository> {
        PostService::new(Arc::new(repo), Arc::new(storage))
    }

    #[tokio::test]
    async fn test_create_with_image() {
        let mut repo = MockPostRepository::new();
        let mut storage = MockImageStorage::new();

        storage
            .expect_save()
            .withf(|ext, bytes| ext == "jpg" && bytes == &vec![0xff, 0xd8])
            .times(1)
            .returning(|_, _| Ok("abc.jpg".to_string()));
        repo.expect_create()
            .withf(|p| p.image_link.as_deref() == Some("abc.jpg") && p.author_id == 1)
            .times(1)
            .returning(|p| Ok(test_post(10, p.author_id, p.image_link.as_deref())));

        let author = test_user(1, "a@example.com", "a");
        let post = service(repo, storage)
            .create(&author, form("Hi", "There"), Some(upload("photo.JPG")))
            .await
            .unwrap();

        assert_eq!(post.id, 10);
        assert_eq!(post.image_link.as_deref(), Some("abc.jpg"));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let mut repo = MockPostRepository::new();
        repo.expect_create().times(0);

        let author = test_user(1, "a@example.com", "a");
        let err = service(repo, MockImageStorage::new())
            .create(&author, form("   ", "Body"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Title can not be empty");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_content() {
        let author = test_user(1, "a@example.com", "a");
        let err = service(MockPostRepository::new(), MockImageStorage::new())
            .create(&author, form("Title", ""), None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Content can not be empty");
    }

    #[tokio::test]
    async fn test_create_rejects_long_content() {
        let author = test_user(1, "a@example.com", "a");
        let long = "x".repeat(MAX_CONTENT_LENGTH + 1);
        let err = service(MockPostRepository::new(), MockImageStorage::new())
            .create(&author, form("Title", &long), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_gif_before_storing() {
        let mut storage = MockImageStorage::new();
        storage.expect_save().times(0);

        let author = test_user(1, "a@example.com", "a");
        let err = service(MockPostRepository::new(), storage)
            .create(&author, form("Title", "Body"), Some(upload("anim.gif")))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid image format. Only JPG, JPEG, and PNG formats are allowed"
        );
    }

    #[tokio::test]
    async fn test_create_failure_discards_image() {
        let mut repo = MockPostRepository::new();
        let mut storage = MockImageStorage::new();

        storage
            .expect_save()
            .returning(|_, _| Ok("orphan.png".to_string()));
        storage
            .expect_delete()
            .withf(|name| name == "orphan.png")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_create()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let author = test_user(1, "a@example.com", "a");
        let result = service(repo, storage)
            .create(&author, form("Title", "Body"), Some(upload("x.png")))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repo, MockImageStorage::new())
            .get(5)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Post not found");
    }

    #[tokio::test]
    async fn test_update_by_stranger_forbidden() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1, None))));
        repo.expect_update().times(0);

        let stranger = test_user(2, "b@example.com", "b");
        let err = service(repo, MockImageStorage::new())
            .update(7, &stranger, form("New", "Body"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden { .. }));
        assert_eq!(
            err.to_string(),
            "Access denied. Only the author can modify or delete the post"
        );
    }

    #[tokio::test]
    async fn test_update_keeps_existing_image() {
        let mut repo = MockPostRepository::new();
        let mut storage = MockImageStorage::new();

        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1, Some("old.png")))));
        repo.expect_update()
            .withf(|id, patch| *id == 7 && patch.image_link.as_deref() == Some("old.png"))
            .times(1)
            .returning(|id, patch| Ok(test_post(id, 1, patch.image_link.as_deref())));
        storage.expect_delete().times(0);

        let author = test_user(1, "a@example.com", "a");
        let post = service(repo, storage)
            .update(7, &author, form("New", "Body"), None)
            .await
            .unwrap();

        assert_eq!(post.image_link.as_deref(), Some("old.png"));
    }

    #[tokio::test]
    async fn test_update_replaces_image() {
        let mut repo = MockPostRepository::new();
        let mut storage = MockImageStorage::new();

        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1, Some("old.png")))));
        storage
            .expect_save()
            .returning(|_, _| Ok("new.jpeg".to_string()));
        repo.expect_update()
            .withf(|_, patch| patch.image_link.as_deref() == Some("new.jpeg"))
            .returning(|id, patch| Ok(test_post(id, 1, patch.image_link.as_deref())));
        storage
            .expect_delete()
            .withf(|name| name == "old.png")
            .times(1)
            .returning(|_| Ok(()));

        let author = test_user(1, "a@example.com", "a");
        let post = service(repo, storage)
            .update(7, &author, form("New", "Body"), Some(upload("pic.jpeg")))
            .await
            .unwrap();

        assert_eq!(post.image_link.as_deref(), Some("new.jpeg"));
    }

    #[tokio::test]
    async fn test_admin_can_delete_any_post() {
        let mut repo = MockPostRepository::new();
        let mut storage = MockImageStorage::new();

        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1, Some("img.png")))));
        repo.expect_delete().times(1).returning(|_| Ok(true));
        storage
            .expect_delete()
            .withf(|name| name == "img.png")
            .times(1)
            .returning(|_| Ok(()));

        let mut admin = test_user(9, "admin@example.com", "admin");
        admin.role = Role::Admin;

        service(repo, storage).delete(3, &admin).await.unwrap();
    }

    #[tokio::test]
    async fn test_feed_pagination() {
        let mut repo = MockPostRepository::new();

        repo.expect_count_by_subscriber()
            .withf(|user_id| *user_id == 4)
            .returning(|_| Ok(5));
        repo.expect_find_by_subscriber()
            .withf(|user_id, query| {
                *user_id == 4
                    && *query
                        == FeedQuery {
                            direction: SortDirection::Asc,
                            limit: 2,
                            offset: 2,
                        }
            })
            .times(1)
            .returning(|_, _| Ok(vec![test_post(3, 1, None), test_post(4, 1, None)]));

        let page = service(repo, MockImageStorage::new())
            .feed(4, Some("asc"), 1, 2)
            .await
            .unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_feed_page_count_with_huge_page_size() {
        let mut repo = MockPostRepository::new();

        repo.expect_count_by_subscriber().returning(|_| Ok(2));
        repo.expect_find_by_subscriber()
            .withf(|_, query| query.limit == i64::MAX && query.offset == 0)
            .returning(|_, _| Ok(vec![test_post(1, 1, None), test_post(2, 1, None)]));

        let page = service(repo, MockImageStorage::new())
            .feed(1, Some("DESC"), 0, i64::MAX)
            .await
            .unwrap();

        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_feed_empty_has_no_pages() {
        let mut repo = MockPostRepository::new();

        repo.expect_count_by_subscriber().returning(|_| Ok(0));
        repo.expect_find_by_subscriber().returning(|_, _| Ok(vec![]));

        let page = service(repo, MockImageStorage::new())
            .feed(1, Some("ASC"), 0, 10)
            .await
            .unwrap();

        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_feed_validation() {
        let svc = service(MockPostRepository::new(), MockImageStorage::new());

        let err = svc.feed(1, None, 0, 10).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sortType value! Must be 'DESC' or 'ASC'"
        );

        let err = svc.feed(1, Some("sideways"), 0, 10).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let err = svc.feed(1, Some("DESC"), -1, 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Page number must be non-negative");

        let err = svc.feed(1, Some("DESC"), 0, 0).await.unwrap_err();
        assert_eq!(err.to_string(), "Page size must be positive");
    }
}
