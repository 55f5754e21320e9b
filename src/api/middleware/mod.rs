//! Layers wrapped around the API and page routers.
//!
//! - [`auth`] - Resolves the session cookie or Bearer token to a [`CurrentUser`]
//! - [`cors`] - Credentialed CORS for the configured origins
//! - [`rate_limit`] - Per-client token buckets, strict for credential routes
//! - [`tracing`] - Request spans and latency logging

pub mod auth;
pub mod cors;
pub mod rate_limit;
pub mod tracing;

pub use auth::CurrentUser;
