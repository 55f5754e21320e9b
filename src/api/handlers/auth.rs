//! Handlers for registration, login and logout.

use axum::{
    Json,
    extract::State,
    http::{HeaderName, StatusCode, header::SET_COOKIE},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::StatusMessage;
use crate::api::dto::auth::{LoginRequest, RegisterRequest};
use crate::domain::entities::{User, UserSummary};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an account and starts a session.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "alice@example.com",
///   "password": "secret",
///   "confirm_password": "secret",
///   "name": "alice"
/// }
/// ```
///
/// # Errors
///
/// - 400 if a field is invalid or the passwords differ
/// - 409 if the email or name is already taken
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(&payload.email, &payload.password, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, session_response(&state, &user)))
}

/// Checks credentials and starts a session.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// Returns 401 "Invalid email or password" on bad credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(session_response(&state, &user))
}

/// Ends the session by expiring the cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
pub async fn logout_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(SET_COOKIE, state.session.clear())],
        Json(StatusMessage::new("Logged out successfully")),
    )
}

/// Issues a token for `user` and pairs the session cookie with the user summary.
fn session_response(state: &AppState, user: &User) -> ([(HeaderName, String); 1], Json<UserSummary>) {
    let token = state.auth_service.issue_token(&user.email);

    (
        [(SET_COOKIE, state.session.issue(&token))],
        Json(user.summary()),
    )
}
