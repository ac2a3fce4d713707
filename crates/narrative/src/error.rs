//! Narrative generator error types.

use thiserror::Error;

/// Errors raised by a narrative generator.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// No API key configured.
    #[error("API key for the narrative service is not configured")]
    MissingApiKey,

    /// Request timed out.
    #[error("Narrative service request timed out")]
    Timeout,

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Service rejected the request with HTTP 429.
    #[error("Narrative service rate limit exceeded")]
    RateLimited,

    /// Service returned a non-success status.
    #[error("Narrative service returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("Invalid response from narrative service: {0}")]
    InvalidResponse(String),

    /// Response had no usable text.
    #[error("Narrative service returned an empty completion")]
    EmptyResponse,

    /// Context could not be serialized into the prompt.
    #[error("Failed to serialize analysis context: {0}")]
    Serialization(String),
}

impl From<NarrativeError> for credrisk_shared::AppError {
    fn from(err: NarrativeError) -> Self {
        match err {
            NarrativeError::MissingApiKey => Self::Config(err.to_string()),
            NarrativeError::Serialization(_) => Self::Internal(err.to_string()),
            _ => Self::ExternalService(err.to_string()),
        }
    }
}
