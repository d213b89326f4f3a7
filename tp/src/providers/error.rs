//! Provider adapter error types

use thiserror::Error;

/// Errors that can occur at a provider boundary
///
/// Steps never let these escape the run; they are converted into planning
/// state log entries at the step boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Text generation failed: {0}")]
    Generation(#[from] crate::llm::LlmError),
}
