//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, Role, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or name is already registered.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Looks a user up by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Lists every user ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Changes the role of a user.
    ///
    /// Returns `Ok(false)` if no user has the given id.
    async fn set_role(&self, id: i64, role: Role) -> Result<bool, AppError>;
}
