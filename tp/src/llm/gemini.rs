//! Gemini API client implementation
//!
//! Implements the TextGenerator trait for the Google Generative Language
//! `generateContent` endpoint. Single request/response, no retries: a failed
//! call surfaces as an error at the step boundary and is never re-attempted.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{GenerationRequest, LlmError, TextGenerator};
use crate::config::LlmConfig;

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new client from LLM configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "GeminiClient::from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the generateContent request body
    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        let max_tokens = request.max_tokens.min(self.max_tokens);

        serde_json::json!({
            "system_instruction": {
                "parts": [{ "text": request.system_prompt }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": max_tokens,
            }
        })
    }

    /// Pull the concatenated text out of the first candidate
    fn parse_response(&self, response: GeminiResponse) -> Result<String, LlmError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let text: String = candidate.content.parts.into_iter().map(|p| p.text).collect();

        if text.is_empty() {
            debug!("parse_response: candidate contained no text");
            return Err(LlmError::InvalidResponse("Empty candidate text".to_string()));
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError> {
        debug!(%self.model, prompt_len = request.prompt.len(), "generate: called");
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "generate: non-success status");
            return Err(LlmError::ApiError { status, message });
        }

        let api_response: GeminiResponse = response.json().await.map_err(LlmError::Network)?;
        self.parse_response(api_response)
    }
}
