//! Browser logout.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
};

use crate::state::AppState;

/// Expires the session cookie and sends the browser to the sign in page.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(SET_COOKIE, state.session.clear())],
        Redirect::to("/login"),
    )
}
