//! API route configuration.

use crate::api::handlers::register_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /users` - Register a new user account
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(register_handler))
}
