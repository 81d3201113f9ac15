//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user account storage.
///
/// The registration workflow depends on exactly two capabilities: an
/// exact-match email lookup and a save that assigns a fresh id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - in-memory fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email address.
    ///
    /// The lookup is exact-match and case-sensitive; no normalization is
    /// applied on either side.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if an account with that email exists
    /// - `Ok(None)` if not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persists a new user record and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken
    /// (unique-constraint race with a concurrent registration).
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, user: &NewUser) -> Result<i64, AppError>;
}
