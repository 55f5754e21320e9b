//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Accounts and roles
//! - [`PostRepository`] - Posts and the activity feed
//! - [`MessageRepository`] - Private messages
//! - [`SubscriptionRepository`] - Follow relationships
//! - [`FriendshipRepository`] - Mutual friendships
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod friendship_repository;
pub mod message_repository;
pub mod post_repository;
pub mod subscription_repository;
pub mod user_repository;

pub use friendship_repository::FriendshipRepository;
pub use message_repository::MessageRepository;
pub use post_repository::{FeedQuery, PostRepository, SortDirection};
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use friendship_repository::MockFriendshipRepository;
#[cfg(test)]
pub use message_repository::MockMessageRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use subscription_repository::MockSubscriptionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
