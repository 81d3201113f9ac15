//! Handler for the user registration endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, extract::State};

use crate::api::dto::register::{RegisterRequest, UserResponse};
use crate::domain::registration::RegistrationOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user account.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Tiago",
///   "surname": "Gridman",
///   "email": "Tiago@example.com",
///   "password": "password123",
///   "password_confirmation": "password123"
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** - serialized user record, including the assigned id
/// - **400 Bad Request** - body `Invalid Request` (any validation failure)
/// - **409 Conflict** - body `User already exists`
/// - **500 Internal Server Error** - body `Internal Server Error`
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Response {
    state.registration_service.register(payload).await.into_response()
}

/// Maps a workflow outcome to its HTTP response.
///
/// Pure translation: one status code and a fixed or serialized body per
/// variant. The failure variants delegate to [`AppError`]'s response
/// mapping, so failure details never reach the client.
impl IntoResponse for RegistrationOutcome {
    fn into_response(self) -> Response {
        match self {
            RegistrationOutcome::Created(user) => {
                (StatusCode::CREATED, Json(UserResponse::from(user))).into_response()
            }
            RegistrationOutcome::Rejected { reason } => {
                AppError::Validation(reason).into_response()
            }
            RegistrationOutcome::Conflict => AppError::Conflict.into_response(),
            RegistrationOutcome::Failed(err) => err.into_response(),
        }
    }
}
