//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx runtime
//! queries with bound parameters and `FromRow` mapping.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Accounts and roles
//! - [`PgPostRepository`] - Posts and the activity feed
//! - [`PgMessageRepository`] - Private messages
//! - [`PgSubscriptionRepository`] - Follow relationships
//! - [`PgFriendshipRepository`] - Friendships

mod rows;

pub mod pg_friendship_repository;
pub mod pg_message_repository;
pub mod pg_post_repository;
pub mod pg_subscription_repository;
pub mod pg_user_repository;

pub use pg_friendship_repository::PgFriendshipRepository;
pub use pg_message_repository::PgMessageRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_subscription_repository::PgSubscriptionRepository;
pub use pg_user_repository::PgUserRepository;
