//! Password hashing abstractions.
//!
//! The [`PasswordHasher`] trait keeps the workflow independent of the
//! concrete algorithm; [`BcryptHasher`] is the shipped implementation.

pub mod bcrypt_hasher;
pub mod hasher;

pub use bcrypt_hasher::BcryptHasher;
pub use hasher::PasswordHasher;

#[cfg(test)]
pub use hasher::MockPasswordHasher;
