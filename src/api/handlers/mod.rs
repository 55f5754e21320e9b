//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod activity_feed;
pub mod auth;
pub mod health;
pub mod messages;
pub mod posts;
pub mod profile;

pub use activity_feed::activity_feed_handler;
pub use auth::{login_handler, logout_handler, register_handler};
pub use health::health_handler;
pub use messages::{history_handler, send_message_handler};
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    update_post_handler,
};
pub use profile::{
    change_status_handler, change_subscription_handler, friends_handler, profile_handler,
    subscribers_handler, subscriptions_handler,
};
