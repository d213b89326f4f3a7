//! TextGenerator trait definition

use async_trait::async_trait;

use super::LlmError;

/// A text-generation request - everything needed for one call
///
/// The workflow only ever needs single request/response generation, no
/// streaming and no conversation state between calls.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System instruction framing the task
    pub system_prompt: String,

    /// Rendered user prompt (from a Handlebars template)
    pub prompt: String,

    /// Max tokens for the response
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl GenerationRequest {
    /// Build a request with the configured generation defaults
    pub fn new(system_prompt: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            prompt: prompt.into(),
            max_tokens: 2000,
            temperature: 0.7,
        }
    }

    /// Override the max token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Stateless text-generation client - each call is independent
///
/// This is the single abstraction the workflow has over its generative
/// collaborator. It is used for airport-code resolution, attraction-record
/// extraction, itinerary synthesis and alternative-destination synthesis.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one generation request and return the raw text response
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError>;
}
