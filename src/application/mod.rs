//! Application layer services implementing business logic.
//!
//! Services consume repository traits, enforce validation and access rules,
//! and expose a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration and user lookup
//! - [`services::auth_service::AuthService`] - Login and session tokens
//! - [`services::post_service::PostService`] - Posts, images and the activity feed
//! - [`services::message_service::MessageService`] - Messages between friends
//! - [`services::profile_service::ProfileService`] - Subscriptions and friendships

pub mod services;
