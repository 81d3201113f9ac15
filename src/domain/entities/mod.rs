//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for
//! creation: [`NewUser`] carries the record before the store assigns an id,
//! [`User`] after. The transition is one-way and happens exactly once.

pub mod user;

pub use user::{NewUser, User};
