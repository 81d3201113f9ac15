//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::RegistrationService;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::security::PasswordHasher;

/// Application state shared across all request handlers.
///
/// Collaborators are injected as trait objects at startup, so tests can wire
/// in-memory or stub implementations through the same constructor.
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates application state from the two external collaborators.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            registration_service: Arc::new(RegistrationService::new(users.clone(), hasher)),
            users,
        }
    }
}
