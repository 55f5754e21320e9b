//! Profiles and the follow graph.
//!
//! A subscriber follows a channel. When two users follow each other the
//! subscriptions become active and the pair are friends. A channel may also
//! accept a subscriber directly, which creates the reverse follow.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{User, UserSummary};
use crate::domain::repositories::{FriendshipRepository, SubscriptionRepository, UserRepository};
use crate::error::AppError;

pub struct ProfileService<U, S, F>
where
    U: UserRepository,
    S: SubscriptionRepository,
    F: FriendshipRepository,
{
    users: Arc<U>,
    subscriptions: Arc<S>,
    friendships: Arc<F>,
}

impl<U, S, F> ProfileService<U, S, F>
where
    U: UserRepository,
    S: SubscriptionRepository,
    F: FriendshipRepository,
{
    pub fn new(users: Arc<U>, subscriptions: Arc<S>, friendships: Arc<F>) -> Self {
        Self {
            users,
            subscriptions,
            friendships,
        }
    }

    pub fn profile(&self, user: &User) -> UserSummary {
        user.summary()
    }

    /// Channels the user follows.
    pub async fn subscriptions(&self, user: &User) -> Result<Vec<UserSummary>, AppError> {
        self.subscriptions.channels_of(user.id).await
    }

    /// Users following the user.
    pub async fn subscribers(&self, user: &User) -> Result<Vec<UserSummary>, AppError> {
        self.subscriptions.subscribers_of(user.id).await
    }

    pub async fn friends(&self, user: &User) -> Result<Vec<UserSummary>, AppError> {
        self.friendships.friends_of(user.id).await
    }

    /// Follows or unfollows `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when targeting oneself and
    /// [`AppError::NotFound`] if the channel does not exist.
    pub async fn change_subscription(
        &self,
        subscriber: &User,
        channel_id: i64,
        subscribe: bool,
    ) -> Result<(), AppError> {
        ensure_not_self(subscriber.id, channel_id)?;
        self.ensure_user_exists(channel_id).await?;

        let subscriber_id = subscriber.id;

        if subscribe {
            if self
                .subscriptions
                .find(channel_id, subscriber_id)
                .await?
                .is_some()
            {
                return Ok(());
            }

            let followed_back = self
                .subscriptions
                .find(subscriber_id, channel_id)
                .await?
                .is_some();

            self.subscriptions
                .create(channel_id, subscriber_id, followed_back)
                .await?;

            if followed_back {
                self.subscriptions
                    .set_active(subscriber_id, channel_id, true)
                    .await?;
                self.friendships.add(subscriber_id, channel_id).await?;
                info!(subscriber_id, channel_id, "Users became friends");
            }
        } else {
            self.subscriptions.delete(channel_id, subscriber_id).await?;
            self.subscriptions
                .set_active(subscriber_id, channel_id, false)
                .await?;
            self.friendships.remove(subscriber_id, channel_id).await?;
        }

        Ok(())
    }

    /// Accepts (`status = true`) or rejects a subscriber of `channel`.
    ///
    /// Accepting makes the channel follow the subscriber back and the pair
    /// become friends. Rejecting deactivates the subscription and drops the
    /// channel's follow of the subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when targeting oneself and
    /// [`AppError::NotFound`] if `subscriber_id` does not follow the channel.
    pub async fn change_subscriber_status(
        &self,
        channel: &User,
        subscriber_id: i64,
        status: bool,
    ) -> Result<(), AppError> {
        ensure_not_self(channel.id, subscriber_id)?;

        let channel_id = channel.id;

        if self
            .subscriptions
            .find(channel_id, subscriber_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Subscription not found",
                json!({ "subscriber_id": subscriber_id }),
            ));
        }

        self.subscriptions
            .set_active(channel_id, subscriber_id, status)
            .await?;

        if status {
            self.subscriptions
                .create(subscriber_id, channel_id, true)
                .await?;
            self.friendships.add(channel_id, subscriber_id).await?;
            info!(channel_id, subscriber_id, "Subscriber accepted");
        } else {
            self.subscriptions.delete(subscriber_id, channel_id).await?;
            self.friendships.remove(channel_id, subscriber_id).await?;
        }

        Ok(())
    }

    async fn ensure_user_exists(&self, id: i64) -> Result<(), AppError> {
        match self.users.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("User not found", json!({ "id": id }))),
        }
    }
}

fn ensure_not_self(user_id: i64, target_id: i64) -> Result<(), AppError> {
    if user_id == target_id {
        Err(AppError::forbidden(
            "You can not follow yourself",
            json!({ "id": target_id }),
        ))
    } else {
        Ok(())
    }
}
