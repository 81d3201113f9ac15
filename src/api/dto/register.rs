//! DTOs for the user registration endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::User;

/// Request to register a new user account.
///
/// Every field is optional at the wire level; presence is part of
/// validation, not deserialization, so an absent field and a blank field
/// both produce the same generic rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_registration"))]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub surname: Option<String>,

    /// Must be non-blank and contain `@`. Exactly that check; the address
    /// is not otherwise parsed or normalized.
    #[validate(custom(function = "validate_email_shape"))]
    pub email: Option<String>,

    /// Must be non-blank and at least 8 characters.
    #[validate(custom(function = "validate_password_shape"))]
    pub password: Option<String>,

    pub password_confirmation: Option<String>,
}

/// A registration request that has passed validation.
///
/// All fields are unwrapped and guaranteed non-blank; the password matched
/// its confirmation. Only [`RegisterRequest::into_valid`] constructs this.
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Validates the request and unwraps it into a [`ValidRegistration`].
    ///
    /// Pure and idempotent: validating the same request twice yields the
    /// same result.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`ValidationErrors`] on any failed check.
    /// Callers collapse them into a single generic rejection; the endpoint
    /// does not report per-field errors.
    pub fn into_valid(self) -> Result<ValidRegistration, ValidationErrors> {
        self.validate()?;

        match (self.name, self.surname, self.email, self.password) {
            (Some(name), Some(surname), Some(email), Some(password)) => Ok(ValidRegistration {
                name,
                surname,
                email,
                password,
            }),
            // Unreachable after validate(), which rejects absent fields.
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Rejects empty or all-whitespace values.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// The email must be present (checked at schema level), non-blank, and
/// contain `@`. A refactoring once inverted this predicate to accept only
/// blank emails; the direction is pinned by tests in this module and in
/// `tests/handler_register.rs`.
fn validate_email_shape(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || !value.contains('@') {
        return Err(ValidationError::new("email_shape"));
    }
    Ok(())
}

/// The password must be non-blank and at least 8 characters long.
fn validate_password_shape(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.chars().count() < 8 {
        return Err(ValidationError::new("password_shape"));
    }
    Ok(())
}

/// Schema-level checks: field presence and password confirmation.
///
/// Field-level custom validators only run on present values, so absent
/// fields are caught here. The confirmation comparison is byte-for-byte
/// and case-sensitive.
fn validate_registration(req: &RegisterRequest) -> Result<(), ValidationError> {
    if req.name.is_none() || req.surname.is_none() || req.email.is_none() || req.password.is_none()
    {
        return Err(ValidationError::new("missing_field"));
    }

    if req.password != req.password_confirmation {
        return Err(ValidationError::new("passwords_mismatch"));
    }

    Ok(())
}

/// Response body for a successfully created user.
///
/// Field order and PascalCase names are part of the wire contract:
/// `{"Id":1,"Name":"...","Surname":"...","Email":"...","HashedPassword":"..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub hashed_password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            email: user.email,
            hashed_password: user.hashed_password,
        }
    }
}
