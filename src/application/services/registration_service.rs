//! User registration workflow service.

use std::sync::Arc;

use crate::api::dto::register::{RegisterRequest, ValidRegistration};
use crate::domain::entities::{NewUser, User};
use crate::domain::registration::RegistrationOutcome;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::PasswordHasher;

/// Service orchestrating the registration workflow.
///
/// A single pass through three steps, each gated by the previous one:
///
/// 1. validate the request structure;
/// 2. check that no account exists for the email;
/// 3. hash the password and persist the record.
///
/// The first failing step short-circuits into the corresponding
/// [`RegistrationOutcome`] variant. No loops, no retries; every failure,
/// expected or not, is folded into exactly one outcome so nothing escapes
/// this boundary uncaught.
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationService {
    /// Creates a new registration service with its collaborators.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Runs the registration workflow for one request.
    pub async fn register(&self, request: RegisterRequest) -> RegistrationOutcome {
        let valid = match request.into_valid() {
            Ok(valid) => valid,
            Err(errors) => {
                return RegistrationOutcome::Rejected {
                    reason: AppError::from(errors).to_string(),
                };
            }
        };

        match self.ensure_email_unregistered(&valid.email).await {
            Ok(()) => {}
            Err(AppError::Conflict) => return RegistrationOutcome::Conflict,
            Err(err) => return RegistrationOutcome::Failed(err),
        }

        match self.create_user(valid).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "user registered");
                RegistrationOutcome::Created(user)
            }
            // A concurrent registration can win the race between the
            // uniqueness check and the save; the store reports it as a
            // conflict and it maps the same way.
            Err(AppError::Conflict) => RegistrationOutcome::Conflict,
            Err(err) => RegistrationOutcome::Failed(err),
        }
    }

    /// Fails with [`AppError::Conflict`] if an account already exists for
    /// the email. The lookup is exact-match and case-sensitive.
    async fn ensure_email_unregistered(&self, email: &str) -> Result<(), AppError> {
        match self.users.find_by_email(email).await? {
            Some(_) => Err(AppError::Conflict),
            None => Ok(()),
        }
    }

    /// Hashes the password, persists the record, and promotes it to a
    /// [`User`] with the id the store assigned.
    ///
    /// Expects a request that already passed validation and the uniqueness
    /// check; neither is re-checked here.
    async fn create_user(&self, valid: ValidRegistration) -> Result<User, AppError> {
        let hashed_password = self.hasher.hash(&valid.password)?;

        let new_user = NewUser::new(valid.name, valid.surname, valid.email, hashed_password);
        let id = self.users.save(&new_user).await?;

        Ok(User::persisted(id, new_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use crate::infrastructure::security::MockPasswordHasher;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            name: Some("Tiago".to_string()),
            surname: Some("Gridman".to_string()),
            email: Some("Tiago@example.com".to_string()),
            password: Some("password123".to_string()),
            password_confirmation: Some("password123".to_string()),
        }
    }

    fn existing_user() -> User {
        User::persisted(
            1,
            NewUser::new(
                "Tiago".to_string(),
                "Gridman".to_string(),
                "Tiago@example.com".to_string(),
                "hashedPassword".to_string(),
            ),
        )
    }

    fn service(users: MockUserRepository, hasher: MockPasswordHasher) -> RegistrationService {
        RegistrationService::new(Arc::new(users), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_without_touching_collaborators() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().never();
        users.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let mut request = valid_request();
        request.name = Some("".to_string());

        let outcome = service(users, hasher).register(request).await;

        assert!(matches!(outcome, RegistrationOutcome::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_existing_email_yields_conflict() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "Tiago@example.com")
            .returning(|_| Ok(Some(existing_user())));
        users.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let outcome = service(users, hasher).register(valid_request()).await;

        assert!(matches!(outcome, RegistrationOutcome::Conflict));
    }

    #[tokio::test]
    async fn test_valid_request_creates_user_and_saves_once() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "Tiago@example.com")
            .returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|user: &NewUser| {
                user.name == "Tiago"
                    && user.surname == "Gridman"
                    && user.email == "Tiago@example.com"
                    && user.hashed_password == "hashedPassword"
            })
            .times(1)
            .returning(|_| Ok(1));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .withf(|plaintext| plaintext == "password123")
            .returning(|_| Ok("hashedPassword".to_string()));

        let outcome = service(users, hasher).register(valid_request()).await;

        match outcome {
            RegistrationOutcome::Created(user) => {
                assert_eq!(user.id, 1);
                assert_eq!(user.name, "Tiago");
                assert_eq!(user.surname, "Gridman");
                assert_eq!(user.email, "Tiago@example.com");
                assert_eq!(user.hashed_password, "hashedPassword");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_yields_failed_outcome() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Err(AppError::Internal("connection reset".to_string())));
        users.expect_save().never();

        let hasher = MockPasswordHasher::new();

        let outcome = service(users, hasher).register(valid_request()).await;

        assert!(matches!(outcome, RegistrationOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_hasher_failure_yields_failed_outcome() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(AppError::Internal("hash failure".to_string())));

        let outcome = service(users, hasher).register(valid_request()).await;

        assert!(matches!(outcome, RegistrationOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_save_failure_yields_failed_outcome() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .returning(|_| Err(AppError::Internal("write failed".to_string())));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("hashedPassword".to_string()));

        let outcome = service(users, hasher).register(valid_request()).await;

        assert!(matches!(outcome, RegistrationOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_unique_violation_at_save_time_yields_conflict() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_save().returning(|_| Err(AppError::Conflict));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("hashedPassword".to_string()));

        let outcome = service(users, hasher).register(valid_request()).await;

        assert!(matches!(outcome, RegistrationOutcome::Conflict));
    }
}
