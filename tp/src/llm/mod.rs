//! Text-generation client module
//!
//! Provides the TextGenerator trait, the Gemini implementation, and helpers
//! for pulling structured data back out of free-form generation output.

pub mod client;
mod error;
pub mod extract;
mod gemini;

pub use client::{GenerationRequest, TextGenerator};
pub use error::LlmError;
pub use gemini::GeminiClient;
