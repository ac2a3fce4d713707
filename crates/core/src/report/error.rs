//! Report error types.

use thiserror::Error;

/// Errors that can occur during report rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required field is absent from the context.
    #[error("Malformed input: missing required field `{0}`")]
    MalformedInput(String),
}

impl From<ReportError> for credrisk_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::MalformedInput(field) => Self::MalformedInput(field),
        }
    }
}
