//! API route configuration.
//!
//! Credential endpoints are public; everything else requires a session via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    activity_feed_handler, change_status_handler, change_subscription_handler,
    create_post_handler, delete_post_handler, friends_handler, get_post_handler, history_handler,
    list_posts_handler, login_handler, logout_handler, profile_handler, register_handler,
    send_message_handler, subscribers_handler, subscriptions_handler, update_post_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Upper bound for post form bodies, image included.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Public credential routes.
///
/// # Endpoints
///
/// - `POST /auth/register` - Create an account and start a session
/// - `POST /auth/login`    - Start a session
/// - `POST /auth/logout`   - End the session
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
}

/// Routes requiring an authenticated session.
///
/// # Endpoints
///
/// - `GET    /posts`                                 - List all posts
/// - `POST   /posts`                                 - Create a post (multipart)
/// - `GET    /posts/{id}`                            - Get a post
/// - `PUT    /posts/{id}`                            - Update a post (multipart)
/// - `DELETE /posts/{id}`                            - Delete a post
/// - `GET    /activity-feed`                         - Posts from followed channels
/// - `GET    /messages/history/{receiverId}`         - Conversation with a friend
/// - `POST   /messages/send/{receiverId}`            - Message a friend
/// - `GET    /profile`                               - Caller's profile
/// - `GET    /profile/subscriptions`                 - Followed channels
/// - `GET    /profile/subscribers`                   - Followers
/// - `GET    /profile/friends`                       - Friends
/// - `POST   /profile/change-subscription/{channelId}` - Follow or unfollow
/// - `POST   /profile/change-status/{subscriberId}`  - Accept or reject a follower
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .route("/activity-feed", get(activity_feed_handler))
        .route("/messages/history/{receiver_id}", get(history_handler))
        .route("/messages/send/{receiver_id}", post(send_message_handler))
        .route("/profile", get(profile_handler))
        .route("/profile/subscriptions", get(subscriptions_handler))
        .route("/profile/subscribers", get(subscribers_handler))
        .route("/profile/friends", get(friends_handler))
        .route(
            "/profile/change-subscription/{channel_id}",
            post(change_subscription_handler),
        )
        .route(
            "/profile/change-status/{subscriber_id}",
            post(change_status_handler),
        )
}
