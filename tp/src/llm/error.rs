//! Text-generation error types

use thiserror::Error;

/// Errors that can occur during text-generation calls
///
/// Request timeouts surface through `Network`; reqwest reports them on its
/// own error type.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
