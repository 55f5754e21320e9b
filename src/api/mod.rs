//! JSON API mounted under `/api`.
//!
//! Handlers stay thin: they extract the [`middleware::CurrentUser`], call a
//! service from [`crate::state::AppState`] and map the result into a DTO.
//! Errors leave as [`crate::error::AppError`] JSON bodies.
//!
//! - [`dto`] - Request and response shapes (`create_date`, camelCase feed pages)
//! - [`handlers`] - Auth, posts, activity feed, messages, profile, health
//! - [`middleware`] - Session auth, CORS, per-IP rate limits, request tracing
//! - [`routes`] - Public credential routes and session-protected routes

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
