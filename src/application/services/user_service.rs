//! Account registration and lookup.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{NewUser, Role, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Service for registering and looking up users.
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Registers a new account with role [`Role::User`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or the name is already taken.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, AppError> {
        let email = email.trim();
        let name = name.trim();

        if self.repository.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(
                "Email is already taken",
                json!({ "field": "email" }),
            ));
        }

        if self.repository.find_by_name(name).await?.is_some() {
            return Err(AppError::conflict(
                "Name is already taken",
                json!({ "field": "name" }),
            ));
        }

        let user = self
            .repository
            .create(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash: hash_password(password)?,
                role: Role::User,
            })
            .await?;

        info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has the given id.
    pub async fn find_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_email(email).await
    }
}
