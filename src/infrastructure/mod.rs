//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and password hashing.
//!
//! # Modules
//!
//! - [`persistence`] - User storage (PostgreSQL and in-memory implementations)
//! - [`security`] - Password hashing (bcrypt implementation)

pub mod persistence;
pub mod security;
