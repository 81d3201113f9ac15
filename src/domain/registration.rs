//! Registration workflow outcome.

use crate::domain::entities::User;
use crate::error::AppError;

/// Tagged result of running the registration workflow.
///
/// Produced only by
/// [`crate::application::services::RegistrationService::register`] and
/// consumed only by the response mapper. Exactly one variant per request;
/// the workflow never returns anything else and never panics across this
/// boundary.
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// The user was created and persisted with the given record.
    Created(User),
    /// The request failed structural validation.
    ///
    /// The reason is a single generic signal for logging; the endpoint does
    /// not report per-field errors.
    Rejected { reason: String },
    /// An account for the requested email already exists.
    Conflict,
    /// A collaborator failed unexpectedly; details stay server-side.
    Failed(AppError),
}
