//! Handlers for post CRUD.

use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::StatusMessage;
use crate::api::dto::post::PostResponse;
use crate::api::middleware::CurrentUser;
use crate::application::services::{ImageUpload, PostForm};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every post, newest first.
///
/// # Endpoint
///
/// `GET /api/posts`
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state.post_service.list_all().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// # Endpoint
///
/// `GET /api/posts/{id}`
///
/// # Errors
///
/// Returns 404 "Post not found".
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state.post_service.get(id).await?;
    Ok(Json(post.into()))
}

/// Publishes a post.
///
/// # Endpoint
///
/// `POST /api/posts` with `multipart/form-data`:
///
/// - `title` - required
/// - `content` - required, up to 5000 characters
/// - `image` - optional JPG, JPEG or PNG file
pub async fn create_post_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let (form, image) = read_post_form(multipart).await?;
    let post = state.post_service.create(&user, form, image).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Replaces the title and content of a post, and its image if one is sent.
///
/// # Endpoint
///
/// `PUT /api/posts/{id}` with the same form as creation.
///
/// # Errors
///
/// - 403 unless the caller is the author or an administrator
/// - 404 if the post does not exist
pub async fn update_post_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<PostResponse>, AppError> {
    let (form, image) = read_post_form(multipart).await?;
    let post = state.post_service.update(id, &user, form, image).await?;

    Ok(Json(post.into()))
}

/// # Endpoint
///
/// `DELETE /api/posts/{id}`
///
/// # Errors
///
/// Same as [`update_post_handler`].
pub async fn delete_post_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<StatusMessage>, AppError> {
    state.post_service.delete(id, &user).await?;
    Ok(Json(StatusMessage::new("Post deleted successfully")))
}

/// Collects the text fields and optional image from a post form.
///
/// An `image` part without a file name or without content counts as absent.
async fn read_post_form(
    mut multipart: Multipart,
) -> Result<(PostForm, Option<ImageUpload>), AppError> {
    let mut title = None;
    let mut content = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("title") => title = Some(field.text().await.map_err(invalid_form)?),
            Some("content") => content = Some(field.text().await.map_err(invalid_form)?),
            Some("image") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(invalid_form)?;

                if !file_name.is_empty() && !bytes.is_empty() {
                    image = Some(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok((
        PostForm {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        },
        image,
    ))
}

fn invalid_form(err: MultipartError) -> AppError {
    AppError::bad_request(
        "Invalid multipart form",
        json!({ "reason": err.body_text() }),
    )
}
