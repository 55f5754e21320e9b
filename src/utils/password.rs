//! Argon2id password hashing.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;
use serde_json::json;

/// Hashes a password into a PHC string with a random 16-byte salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the OS random source or the hasher fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::fill(&mut salt_bytes).map_err(|e| {
        AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
    })?;

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
        })
}

/// Checks a password against a stored PHC string.
///
/// An unparsable stored hash never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
