//! Handlers for the caller's profile and social graph.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::StatusMessage;
use crate::api::dto::profile::{StatusParams, SubscriptionParams};
use crate::api::middleware::CurrentUser;
use crate::domain::entities::UserSummary;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/profile`
pub async fn profile_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<UserSummary> {
    Json(state.profile_service.profile(&user))
}

/// Channels the caller follows.
///
/// `GET /api/profile/subscriptions`
pub async fn subscriptions_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.profile_service.subscriptions(&user).await?))
}

/// Users following the caller.
///
/// `GET /api/profile/subscribers`
pub async fn subscribers_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.profile_service.subscribers(&user).await?))
}

/// `GET /api/profile/friends`
pub async fn friends_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.profile_service.friends(&user).await?))
}

/// Follows or unfollows a channel.
///
/// # Endpoint
///
/// `POST /api/profile/change-subscription/{channelId}?subscribe=true|false`
///
/// # Errors
///
/// - 403 "You can not follow yourself"
/// - 404 if the channel does not exist
pub async fn change_subscription_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(channel_id): Path<i64>,
    Query(params): Query<SubscriptionParams>,
) -> Result<Json<StatusMessage>, AppError> {
    state
        .profile_service
        .change_subscription(&user, channel_id, params.subscribe)
        .await?;

    Ok(Json(StatusMessage::new("Subscription changed successfully")))
}

/// Accepts or rejects one of the caller's subscribers.
///
/// # Endpoint
///
/// `POST /api/profile/change-status/{subscriberId}?status=true|false`
///
/// # Errors
///
/// - 403 when targeting oneself
/// - 404 "Subscription not found"
pub async fn change_status_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(subscriber_id): Path<i64>,
    Query(params): Query<StatusParams>,
) -> Result<Json<StatusMessage>, AppError> {
    state
        .profile_service
        .change_subscriber_status(&user, subscriber_id, params.status)
        .await?;

    Ok(Json(StatusMessage::new(
        "Subscriber status changed successfully",
    )))
}
