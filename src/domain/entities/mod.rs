//! Core domain entities representing the social graph and its content.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account with a [`Role`]
//! - [`Post`] - A post published by a user
//! - [`Message`] - A private message between friends
//! - [`Subscription`] - A subscriber following a channel
//!
//! Creation inputs follow the `New*` naming (`NewUser`, `NewPost`,
//! `NewMessage`); partial updates use `PostPatch`.

pub mod message;
pub mod post;
pub mod subscription;
pub mod user;

pub use message::{Message, NewMessage};
pub use post::{MAX_CONTENT_LENGTH, NewPost, Post, PostPatch};
pub use subscription::{FriendPair, Subscription};
pub use user::{NewUser, Role, User, UserSummary};
