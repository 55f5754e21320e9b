//! Session authentication middleware for API routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// The authenticated user, inserted into request extensions by [`layer`] and
/// by the web session middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "No authenticated user"}),
                )
            })
    }
}

/// Authenticates requests using the session cookie or a Bearer token.
///
/// # Token Sources
///
/// 1. The session cookie (name from `JWT_COOKIE_NAME`)
/// 2. `Authorization: Bearer <jwt>`
///
/// On success the resolved [`CurrentUser`] is stored in request extensions.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is present, or if it is expired,
/// forged, or names an unknown user.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/api/posts", get(list_posts_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match st.session.read(&parts.headers) {
        Some(token) => token,
        None => {
            let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
                .await
                .map_err(|_| {
                    AppError::unauthorized(
                        "Unauthorized",
                        serde_json::json!({"reason": "Session cookie or bearer token is missing"}),
                    )
                })?;
            token
        }
    };

    let user = st.auth_service.authenticate(&token).await?;
    parts.extensions.insert(CurrentUser(user));

    Ok(next.run(Request::from_parts(parts, body)).await)
}
