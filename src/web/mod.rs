//! Browser-facing pages.
//!
//! The [`navigation`] table decides which paths exist and what each renders.
//! Pages are server-side Askama shells that talk to the JSON API.
//!
//! # Modules
//!
//! - [`navigation`] - Route table, exact path resolution, legacy redirects
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie session check for protected pages
//! - [`routes`] - Axum routes built from the table

pub mod handlers;
pub mod middleware;
pub mod navigation;
pub mod routes;
