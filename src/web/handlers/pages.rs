//! Page rendering for navigation table entries.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use serde_json::json;

use crate::api::middleware::CurrentUser;
use crate::domain::entities::UserSummary;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::navigation::{NavigationTable, Page, RouteEntry};

/// Navigation bar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// Builds the navigation bar for a visitor.
///
/// Signed-in users see the pages that need a session; visitors see the
/// sign in and sign up pages. `Main` is always shown.
pub fn nav_links(table: &NavigationTable, current: Option<&str>, signed_in: bool) -> Vec<NavLink> {
    table
        .iter()
        .filter(|entry| entry.page == Page::Main || entry.page.requires_session() == signed_in)
        .map(|entry| NavLink {
            path: entry.path,
            title: entry.page.title(),
            active: Some(entry.path) == current,
        })
        .collect()
}

/// Layout shell rendering one page inside `<main id="app">`.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub entry: RouteEntry,
    pub nav: Vec<NavLink>,
    pub user: Option<UserSummary>,
}

impl PageTemplate {
    pub fn new(table: &NavigationTable, entry: RouteEntry, user: Option<UserSummary>) -> Self {
        Self {
            nav: nav_links(table, Some(entry.path), user.is_some()),
            entry,
            user,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
    pub nav: Vec<NavLink>,
    pub user: Option<UserSummary>,
}

/// GET route rendering `entry`.
///
/// The user, when present, was put into request extensions by the session
/// middleware of protected routes.
pub fn page_route(entry: RouteEntry) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>, request: Request| async move {
        let user = request
            .extensions()
            .get::<CurrentUser>()
            .map(|CurrentUser(user)| user.summary());

        PageTemplate::new(&state.navigation, entry, user)
    })
}

/// Fallback for paths no route matches.
///
/// API paths get the JSON error body; everything else gets an HTML page.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path().to_string();

    if path.starts_with("/api/") {
        return AppError::not_found("Resource not found", json!({ "path": path })).into_response();
    }

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            nav: nav_links(&state.navigation, None, false),
            path,
            user: None,
        },
    )
        .into_response()
}
