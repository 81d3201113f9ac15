//! Application-wide error type and HTTP response mapping.
//!
//! Every failure inside the registration workflow travels as an [`AppError`]
//! until the orchestrator folds it into a
//! [`crate::domain::registration::RegistrationOutcome`]. The HTTP bodies for
//! the failure cases are fixed literal texts; clients never see error
//! details or per-field validation messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application error taxonomy.
///
/// Three kinds cover the whole workflow: malformed input, duplicate email,
/// and everything else (collaborator failures included).
#[derive(Debug, Error)]
pub enum AppError {
    /// The request failed structural validation (400 Bad Request).
    ///
    /// The message is kept for logging only; the response body is always
    /// the literal `Invalid Request`.
    #[error("invalid request: {0}")]
    Validation(String),

    /// An account for the requested email already exists (409 Conflict).
    #[error("user already exists")]
    Conflict,

    /// Unexpected failure from a collaborator (500 Internal Server Error).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    /// Collapses field-level validation errors into the single generic
    /// validation failure the endpoint contract exposes.
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    /// Maps database errors, distinguishing unique-constraint violations.
    ///
    /// A duplicate email that slips past the uniqueness check (concurrent
    /// registration) surfaces here as a unique violation and must become a
    /// conflict, not an internal error.
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e
            && db.is_unique_violation()
        {
            return Self::Conflict;
        }

        Self::Internal(format!("database error: {e}"))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing failed: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(ref reason) => {
                tracing::debug!(%reason, "request rejected");
                (StatusCode::BAD_REQUEST, "Invalid Request")
            }
            AppError::Conflict => (StatusCode::CONFLICT, "User already exists"),
            AppError::Internal(ref reason) => {
                tracing::error!(%reason, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, body).into_response()
    }
}
