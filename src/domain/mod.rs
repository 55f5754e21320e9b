//! Users, posts, messages and the follow graph, plus the storage contracts
//! the services depend on.
//!
//! Nothing here knows about HTTP or SQL. Access rules such as "only friends
//! exchange messages" are enforced in [`crate::application::services`].
//!
//! - [`entities`] - Plain data types and their `New*` creation inputs
//! - [`repositories`] - Async repository traits, mockable in unit tests

pub mod entities;
pub mod repositories;
