//! Page routes materialized from the navigation table.

use crate::state::AppState;
use crate::web::handlers::{logout_handler, page_route};
use crate::web::navigation::NavigationTable;
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

/// Pages that need a session.
///
/// Protected via [`crate::web::middleware::web_auth`]. For the current table
/// these are `/posts`, `/profile`, `/friends` and `/activity`.
pub fn protected_routes(table: &NavigationTable) -> Router<AppState> {
    table
        .iter()
        .filter(|entry| entry.page.requires_session())
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, page_route(*entry))
        })
}

/// Pages open to everyone, plus `POST /logout`.
///
/// For the current table these are `/`, `/login` and `/register`.
pub fn public_routes(table: &NavigationTable) -> Router<AppState> {
    table
        .iter()
        .filter(|entry| !entry.page.requires_session())
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, page_route(*entry))
        })
        .route("/logout", post(logout_handler))
}

/// Permanent redirects from paths of the legacy table that the served table
/// no longer has, e.g. `/articles` to `/posts`.
pub fn legacy_routes(table: &NavigationTable) -> Router<AppState> {
    table
        .redirects_from(&NavigationTable::legacy())
        .into_iter()
        .fold(Router::new(), |router, (old_path, target)| {
            let target = target.path;
            router.route(
                old_path,
                get(move || async move { Redirect::permanent(target) }),
            )
        })
}
