//! Credential checks and session tokens.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::JwtCodec;
use crate::utils::password::verify_password;

/// Service for logging users in and authenticating session tokens.
///
/// Tokens are HS256 JWTs whose subject is the user's email.
pub struct AuthService<U: UserRepository> {
    repository: Arc<U>,
    codec: JwtCodec,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(repository: Arc<U>, codec: JwtCodec) -> Self {
        Self { repository, codec }
    }

    /// Lifetime of issued tokens, also used as the session cookie `Max-Age`.
    pub fn token_lifetime_seconds(&self) -> i64 {
        self.codec.expiration_seconds()
    }

    /// Checks an email and password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.repository.find_by_email(email.trim()).await?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => Ok(user),
            _ => Err(AppError::unauthorized(
                "Invalid email or password",
                json!({}),
            )),
        }
    }

    pub fn issue_token(&self, email: &str) -> String {
        self.codec.issue(email)
    }

    /// Resolves a session token to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, forged, expired,
    /// or names a user that no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.codec.verify(token).map_err(|e| {
            debug!(reason = %e, "Rejected session token");
            invalid_token()
        })?;

        self.repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(invalid_token)
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized("Jwt token is expired or invalid", json!({}))
}
