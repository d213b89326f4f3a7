//! Airport-code resolution
//!
//! Resolves a city name to a 3-letter IATA code via text generation, falling
//! back to a deterministic uppercase truncation of the city name. Never
//! returns an error to the caller.

use std::sync::Arc;
use tracing::debug;

use crate::llm::{GenerationRequest, TextGenerator};
use crate::prompts;

/// Deterministic fallback: first three characters, uppercased
fn truncated_code(city: &str) -> String {
    city.to_uppercase().chars().take(3).collect()
}

/// A plausible IATA code is exactly three ASCII letters
fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Resolve the main airport code for a city
pub async fn resolve_airport_code(llm: &Arc<dyn TextGenerator>, city: &str) -> String {
    debug!(%city, "resolve_airport_code: called");

    let prompt = match prompts::render("airport", &serde_json::json!({ "city": city })) {
        Ok(prompt) => prompt,
        Err(e) => {
            debug!(error = %e, "resolve_airport_code: render failed, using truncation");
            return truncated_code(city);
        }
    };

    let request = GenerationRequest::new(prompts::AIRPORT_SYSTEM, prompt).with_max_tokens(10);

    match llm.generate(request).await {
        Ok(response) => {
            let code = response.trim().to_uppercase();
            if is_valid_code(&code) {
                debug!(%code, "resolve_airport_code: resolved");
                code
            } else {
                debug!(raw = %code, "resolve_airport_code: invalid code, using truncation");
                truncated_code(city)
            }
        }
        Err(e) => {
            debug!(error = %e, "resolve_airport_code: generation failed, using truncation");
            truncated_code(city)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockTextGenerator;

    fn llm(responses: Vec<&str>) -> Arc<dyn TextGenerator> {
        Arc::new(MockTextGenerator::new(responses))
    }

    #[tokio::test]
    async fn test_valid_code_passes_through() {
        let llm = llm(vec!["  jfk \n"]);
        assert_eq!(resolve_airport_code(&llm, "New York").await, "JFK");
    }

    #[tokio::test]
    async fn test_chatty_response_falls_back() {
        let llm = llm(vec!["The main airport of Paris is CDG."]);
        assert_eq!(resolve_airport_code(&llm, "Paris").await, "PAR");
    }

    #[tokio::test]
    async fn test_generation_failure_falls_back() {
        let llm: Arc<dyn TextGenerator> = Arc::new(MockTextGenerator::failing("offline"));
        assert_eq!(resolve_airport_code(&llm, "Tokyo").await, "TOK");
    }

    #[test]
    fn test_truncation_of_short_names() {
        assert_eq!(truncated_code("Ur"), "UR");
        assert_eq!(truncated_code("rio de janeiro"), "RIO");
    }

    #[test]
    fn test_code_validation() {
        assert!(is_valid_code("JFK"));
        assert!(!is_valid_code("JFKX"));
        assert!(!is_valid_code("J1K"));
        assert!(!is_valid_code(""));
    }
}
