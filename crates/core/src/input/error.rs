//! Input error types.

use thiserror::Error;

/// Errors raised while reading a credit application.
#[derive(Debug, Error)]
pub enum InputError {
    /// Payload is not valid JSON or does not match the expected shape.
    #[error("Invalid payload: {0}")]
    Parse(String),

    /// Payload parsed but violates a field constraint.
    #[error("Payload failed validation: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for InputError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Invalid(err.to_string())
    }
}

impl From<InputError> for credrisk_shared::AppError {
    fn from(err: InputError) -> Self {
        Self::Validation(err.to_string())
    }
}
