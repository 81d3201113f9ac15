//! Repository implementations.
//!
//! Concrete implementations of domain repository traits.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - PostgreSQL-backed user storage
//! - [`MemoryUserRepository`] - in-memory fallback for development and tests

pub mod memory_user_repository;
pub mod pg_user_repository;

pub use memory_user_repository::MemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
