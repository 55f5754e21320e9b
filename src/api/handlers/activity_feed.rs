//! Handler for the activity feed.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::{FeedParams, PageResponse};
use crate::api::dto::post::PostResponse;
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Posts from channels the caller follows.
///
/// # Endpoint
///
/// `GET /api/activity-feed?sortType=DESC&page=0&pageSize=10`
///
/// - `sortType` - `ASC` or `DESC` by creation date, case-insensitive (required)
/// - `page` - zero-based page number (default 0)
/// - `pageSize` - posts per page (default 10)
///
/// # Response
///
/// ```json
/// {
///   "content": [ ... ],
///   "page": 0,
///   "pageSize": 10,
///   "totalElements": 42,
///   "totalPages": 5
/// }
/// ```
pub async fn activity_feed_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<FeedParams>,
) -> Result<Json<PageResponse<PostResponse>>, AppError> {
    let page = state
        .post_service
        .feed(
            user.id,
            params.sort_type.as_deref(),
            params.page(),
            params.page_size(),
        )
        .await?;

    Ok(Json(page.into()))
}
