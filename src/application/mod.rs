//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating collaborator
//! calls, validation, and business rules. Services consume the repository
//! and hasher traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registration_service::RegistrationService`] - User registration workflow

pub mod services;
