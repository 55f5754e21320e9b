//! Utility helpers shared by the service and transport layers.
//!
//! - [`jwt`] - HS256 session token encoding and verification
//! - [`password`] - Argon2 password hashing
//! - [`cookie`] - Session cookie formatting and parsing

pub mod cookie;
pub mod jwt;
pub mod password;
