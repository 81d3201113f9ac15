//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod register;

pub use health::health_handler;
pub use register::register_handler;
