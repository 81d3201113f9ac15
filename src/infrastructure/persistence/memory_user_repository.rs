//! In-memory implementation of the user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// A user repository that keeps accounts in process memory.
///
/// Used when no database is configured, and by HTTP integration tests.
/// Ids are assigned sequentially starting from 1; all data is lost on
/// restart.
///
/// # Use Cases
///
/// - Development environments without PostgreSQL
/// - Integration tests that exercise the full HTTP stack
/// - Fallback when `DATABASE_URL` is not set at startup
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        debug!("Using MemoryUserRepository (no database configured)");
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        // Exact, case-sensitive comparison, matching the SQL `=` semantics.
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: &NewUser) -> Result<i64, AppError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict);
        }

        let id = users.len() as i64 + 1;
        users.push(User::persisted(id, user.clone()));

        Ok(id)
    }
}
