//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain model following Clean Architecture
//! principles. It defines entities, repository interfaces, and the workflow
//! outcome independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`registration`] - Registration workflow outcome model
//!
//! # Registration Flow
//!
//! 1. HTTP handler receives a registration request
//! 2. [`crate::application::services::RegistrationService`] validates it,
//!    checks email uniqueness, hashes the password, and persists the record
//! 3. The resulting [`registration::RegistrationOutcome`] is mapped to an
//!    HTTP response by the API layer

pub mod entities;
pub mod registration;
pub mod repositories;
