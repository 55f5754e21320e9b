//! Handlers for private messages.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::StatusMessage;
use crate::api::dto::message::{MessageResponse, SendMessageRequest};
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Conversation with another user, oldest first.
///
/// # Endpoint
///
/// `GET /api/messages/history/{receiverId}`
///
/// # Errors
///
/// - 403 if the users are not friends
/// - 404 if the other user does not exist
pub async fn history_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(receiver_id): Path<i64>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state.message_service.history(&user, receiver_id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// # Endpoint
///
/// `POST /api/messages/send/{receiverId}` with `{"content": "..."}`
///
/// # Errors
///
/// Same as [`history_handler`], plus 400 for blank content.
pub async fn send_message_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(receiver_id): Path<i64>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<StatusMessage>, AppError> {
    payload.validate()?;

    state
        .message_service
        .send(&user, receiver_id, &payload.content)
        .await?;

    Ok(Json(StatusMessage::new("Message sent successfully")))
}
