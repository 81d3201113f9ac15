//! Password hashing trait.

use crate::error::AppError;

/// Trait for one-way password hashing.
///
/// The workflow treats the hash as an opaque transform: it only promises
/// that the stored value is the hasher's output and never the plaintext.
/// Verification schemes are the implementation's concern.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::BcryptHasher`] - bcrypt with configurable cost
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the underlying algorithm fails.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;
}
