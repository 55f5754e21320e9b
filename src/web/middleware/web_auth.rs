//! Cookie-based session middleware for browser pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::CurrentUser;
use crate::state::AppState;

/// Sign in page that unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Authenticates page requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Read the session cookie from the `Cookie` header
/// 2. Resolve it via [`crate::application::services::AuthService::authenticate`]
/// 3. On success, store [`CurrentUser`] in request extensions and continue
/// 4. On failure or missing cookie, redirect to [`LOGIN_PATH`]
///
/// # Differences from API Auth
///
/// Unlike the API auth middleware which returns `401 Unauthorized`,
/// this middleware redirects to the login page, and it ignores
/// `Authorization` headers since browsers navigate with cookies.
///
/// # Example
///
/// ```rust,ignore
/// let protected = web::routes::protected_routes(&table)
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = st.session.read(req.headers()) else {
        return Err(Redirect::to(LOGIN_PATH));
    };

    match st.auth_service.authenticate(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        Err(_) => Err(Redirect::to(LOGIN_PATH)),
    }
}

/// Resolves the session cookie when one is present, without requiring it.
///
/// Used on public pages so a signed-in visitor still gets their navigation
/// and logout form. A missing or invalid cookie passes the request through
/// untouched.
pub async fn optional_layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = st.session.read(req.headers()) {
        if let Ok(user) = st.auth_service.authenticate(&token).await {
            req.extensions_mut().insert(CurrentUser(user));
        }
    }

    next.run(req).await
}
