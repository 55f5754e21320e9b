//! Adapters behind the domain traits: PostgreSQL repositories and the
//! on-disk store for post images.
//!
//! - [`persistence`] - `Pg*Repository` types over a shared `PgPool`
//! - [`storage`] - [`storage::ImageStorage`] with a filesystem backend served under `/img`

pub mod persistence;
pub mod storage;
