//! User validation utilities

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("value is not a valid email address")]
    InvalidEmail,

    #[error("{0} may not be null")]
    NullField(&'static str),
}

impl UserValidationError {
    /// Name of the input field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::NullField(field) => field,
        }
    }

    /// Stable machine-readable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::NullField(_) => "null_field",
        }
    }
}

/// Validate an email address
///
/// Follows the HTML5 / WHATWG address grammar as implemented by the
/// `validator` crate: a non-empty local part, a single `@` and a host
/// that is a valid domain or bracketed IP literal.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail)
    }
}
