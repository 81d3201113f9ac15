#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use user_registration::domain::entities::{NewUser, User};
use user_registration::domain::repositories::UserRepository;
use user_registration::error::AppError;
use user_registration::infrastructure::persistence::MemoryUserRepository;
use user_registration::infrastructure::security::PasswordHasher;
use user_registration::state::AppState;

/// Deterministic hasher for integration tests.
///
/// Always returns the fixed string `hashedPassword`, matching the exact
/// response body the success-path tests assert against.
pub struct StubHasher;

impl PasswordHasher for StubHasher {
    fn hash(&self, _plaintext: &str) -> Result<String, AppError> {
        Ok("hashedPassword".to_string())
    }
}

/// Repository whose every operation fails, for exercising the 500 path.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(AppError::Internal("store unavailable".to_string()))
    }

    async fn save(&self, _user: &NewUser) -> Result<i64, AppError> {
        Err(AppError::Internal("store unavailable".to_string()))
    }
}

/// Builds application state over an in-memory store and the stub hasher.
///
/// Returns the repository handle alongside the state so tests can seed and
/// inspect stored users directly.
pub fn create_test_state() -> (AppState, Arc<MemoryUserRepository>) {
    let users = Arc::new(MemoryUserRepository::new());
    let state = AppState::new(users.clone(), Arc::new(StubHasher));
    (state, users)
}

/// Builds application state whose store fails every operation.
pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingUserRepository), Arc::new(StubHasher))
}

/// Seeds an existing account directly into the store.
pub async fn seed_user(users: &MemoryUserRepository, email: &str) {
    users
        .save(&NewUser::new(
            "Tiago".to_string(),
            "Gridman".to_string(),
            email.to_string(),
            "hashedPassword".to_string(),
        ))
        .await
        .unwrap();
}
