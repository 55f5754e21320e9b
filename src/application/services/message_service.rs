//! Private messaging between friends.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Message, NewMessage, User};
use crate::domain::repositories::{FriendshipRepository, MessageRepository, UserRepository};
use crate::error::AppError;

/// Service for exchanging messages. Both directions require a friendship.
pub struct MessageService<M, U, F>
where
    M: MessageRepository,
    U: UserRepository,
    F: FriendshipRepository,
{
    messages: Arc<M>,
    users: Arc<U>,
    friendships: Arc<F>,
}

impl<M, U, F> MessageService<M, U, F>
where
    M: MessageRepository,
    U: UserRepository,
    F: FriendshipRepository,
{
    pub fn new(messages: Arc<M>, users: Arc<U>, friendships: Arc<F>) -> Self {
        Self {
            messages,
            users,
            friendships,
        }
    }

    /// Sends a message from `sender` to the user `receiver_id`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the content is blank
    /// - [`AppError::NotFound`] if the receiver does not exist
    /// - [`AppError::Forbidden`] if the users are not friends
    pub async fn send(
        &self,
        sender: &User,
        receiver_id: i64,
        content: &str,
    ) -> Result<Message, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::bad_request(
                "Message content can not be empty",
                json!({ "field": "content" }),
            ));
        }

        self.ensure_friends(sender.id, receiver_id).await?;

        let message = self
            .messages
            .create(NewMessage {
                sender_id: sender.id,
                receiver_id,
                content: content.to_string(),
            })
            .await?;

        debug!(message_id = message.id, sender_id = sender.id, receiver_id, "Message sent");

        Ok(message)
    }

    /// Conversation with `other_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send`] apart from content validation.
    pub async fn history(&self, user: &User, other_id: i64) -> Result<Vec<Message>, AppError> {
        self.ensure_friends(user.id, other_id).await?;
        self.messages.history(user.id, other_id).await
    }

    async fn ensure_friends(&self, user_id: i64, other_id: i64) -> Result<(), AppError> {
        if self.users.find_by_id(other_id).await?.is_none() {
            return Err(AppError::not_found(
                "User not found",
                json!({ "id": other_id }),
            ));
        }

        if user_id == other_id || !self.friendships.are_friends(user_id, other_id).await? {
            return Err(AppError::forbidden(
                "You can only exchange messages with friends",
                json!({ "id": other_id }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::user_service::tests::test_user;
    use crate::domain::entities::UserSummary;
    use crate::domain::repositories::{
        MockFriendshipRepository, MockMessageRepository, MockUserRepository,
    };
    use chrono::{Duration, Utc};

    type Service = MessageService<MockMessageRepository, MockUserRepository, MockFriendshipRepository>;

    fn build(
        messages: MockMessageRepository,
        users: MockUserRepository,
        friendships: MockFriendshipRepository,
    ) -> Service {
        MessageService::new(Arc::new(messages), Arc::new(users), Arc::new(friendships))
    }

    fn users_with(ids: &'static [i64]) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(move |id| {
            Ok(ids
                .contains(&id)
                .then(|| test_user(id, &format!("u{}@example.com", id), &format!("u{}", id))))
        });
        users
    }

    fn message(id: i64, from: i64, to: i64, minutes_ago: i64) -> Message {
        Message {
            id,
            sender: UserSummary { id: from, name: format!("u{}", from) },
            receiver: UserSummary { id: to, name: format!("u{}", to) },
            content: format!("message {}", id),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_send_to_friend() {
        let mut messages = MockMessageRepository::new();
        let mut friendships = MockFriendshipRepository::new();

        friendships
            .expect_are_friends()
            .withf(|a, b| *a == 1 && *b == 2)
            .returning(|_, _| Ok(true));
        messages
            .expect_create()
            .withf(|m| m.sender_id == 1 && m.receiver_id == 2 && m.content == "hello")
            .times(1)
            .returning(|m| Ok(message(1, m.sender_id, m.receiver_id, 0)));

        let service = build(messages, users_with(&[1, 2]), friendships);
        let sender = test_user(1, "u1@example.com", "u1");

        let sent = service.send(&sender, 2, "hello").await.unwrap();
        assert_eq!(sent.receiver.id, 2);
    }

    #[tokio::test]
    async fn test_send_to_stranger_forbidden() {
        let mut messages = MockMessageRepository::new();
        let mut friendships = MockFriendshipRepository::new();

        friendships.expect_are_friends().returning(|_, _| Ok(false));
        messages.expect_create().times(0);

        let service = build(messages, users_with(&[1, 2]), friendships);
        let sender = test_user(1, "u1@example.com", "u1");

        let err = service.send(&sender, 2, "hello").await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
        assert_eq!(err.to_string(), "You can only exchange messages with friends");
    }

    #[tokio::test]
    async fn test_send_to_unknown_user() {
        let service = build(
            MockMessageRepository::new(),
            users_with(&[1]),
            MockFriendshipRepository::new(),
        );
        let sender = test_user(1, "u1@example.com", "u1");

        let err = service.send(&sender, 42, "hello").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_send_blank_message() {
        let service = build(
            MockMessageRepository::new(),
            MockUserRepository::new(),
            MockFriendshipRepository::new(),
        );
        let sender = test_user(1, "u1@example.com", "u1");

        let err = service.send(&sender, 2, "  \n ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_history_returns_both_directions() {
        let mut messages = MockMessageRepository::new();
        let mut friendships = MockFriendshipRepository::new();

        friendships.expect_are_friends().returning(|_, _| Ok(true));
        messages
            .expect_history()
            .withf(|a, b| *a == 1 && *b == 2)
            .returning(|_, _| Ok(vec![message(1, 1, 2, 10), message(2, 2, 1, 5)]));

        let service = build(messages, users_with(&[1, 2]), friendships);
        let user = test_user(1, "u1@example.com", "u1");

        let history = service.history(&user, 2).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender.id, 1);
        assert_eq!(history[1].sender.id, 2);
        assert!(history[0].created_at < history[1].created_at);
    }
}
