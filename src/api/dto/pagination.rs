//! Activity feed query parameters and page envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::api::dto::post::PostResponse;
use crate::application::services::FeedPage;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query string of `GET /api/activity-feed`.
///
/// `page` is zero-based. Range checks happen in the service so that every
/// violation yields the same JSON error shape.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedParams {
    #[serde(default)]
    pub sort_type: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page_size: Option<i64>,
}

impl FeedParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl From<FeedPage> for PageResponse<PostResponse> {
    fn from(page: FeedPage) -> Self {
        Self {
            content: page.content.into_iter().map(PostResponse::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
