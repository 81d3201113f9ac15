//! bcrypt implementation of the password hasher.

use super::hasher::PasswordHasher;
use crate::error::AppError;

/// Password hasher backed by the bcrypt algorithm.
///
/// The cost factor comes from configuration (`BCRYPT_COST`); higher values
/// slow down brute-force attempts at the price of request latency.
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Creates a new hasher with the given cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }
}
