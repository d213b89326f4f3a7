//! SerpAPI organic-search attraction adapter
//!
//! Two-stage lookup: a plain web search for top attractions, then a
//! text-generation pass that extracts structured Attraction records from the
//! result snippets. A failed extraction degrades to an empty list.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::{AttractionProvider, ProviderError};
use crate::config::ApiEndpoint;
use crate::domain::Attraction;
use crate::llm::{GenerationRequest, TextGenerator, extract};
use crate::prompts;

/// Organic results summarized for extraction
const MAX_ORGANIC_RESULTS: usize = 5;

/// SerpAPI attraction client with LLM-backed extraction
pub struct SerpApiAttractionClient {
    api_key: String,
    base_url: String,
    http: Client,
    llm: Arc<dyn TextGenerator>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

impl SerpApiAttractionClient {
    /// Create a new client from endpoint configuration
    pub fn from_config(config: &ApiEndpoint, llm: Arc<dyn TextGenerator>) -> Result<Self, ProviderError> {
        debug!(base_url = %config.base_url, "SerpApiAttractionClient::from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|_| ProviderError::MissingApiKey(config.api_key_env.clone()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http,
            llm,
        })
    }

    /// Summarize organic results as `- title: snippet` lines
    fn summarize_results(results: &[OrganicResult]) -> String {
        results
            .iter()
            .take(MAX_ORGANIC_RESULTS)
            .map(|r| format!("- {}: {}", r.title, r.snippet))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse the generation output into attraction records
    ///
    /// Best effort: anything that is not a well-formed array of records
    /// yields an empty list rather than an error.
    fn parse_generated(response: &str) -> Vec<Attraction> {
        debug!(response_len = response.len(), "parse_generated: called");
        let Some(json) = extract::extract_json_array(response) else {
            debug!("parse_generated: no JSON array in response");
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(attractions) => attractions,
            Err(e) => {
                debug!(error = %e, "parse_generated: array did not deserialize");
                Vec::new()
            }
        }
    }

    /// Run the extraction stage over raw search results
    async fn extract_attractions(&self, data: SearchResponse, destination: &str) -> Result<Vec<Attraction>, ProviderError> {
        if data.organic_results.is_empty() {
            debug!("extract_attractions: no organic results");
            return Ok(Vec::new());
        }

        let results_text = Self::summarize_results(&data.organic_results);
        let prompt = prompts::render(
            "attractions",
            &serde_json::json!({ "destination": destination, "results": results_text }),
        )
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let response = self
            .llm
            .generate(GenerationRequest::new(prompts::ATTRACTIONS_SYSTEM, prompt))
            .await?;

        Ok(Self::parse_generated(&response))
    }
}

#[async_trait]
impl AttractionProvider for SerpApiAttractionClient {
    async fn search(&self, destination: &str) -> Result<Vec<Attraction>, ProviderError> {
        debug!(%destination, "search: called");

        let url = format!("{}/search.json", self.base_url);
        let q = format!("top tourist attractions in {}", destination);

        let params = [
            ("engine", "google".to_string()),
            ("q", q),
            ("num", "10".to_string()),
            ("api_key", self.api_key.clone()),
        ];

        let response = self
            .http
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(ProviderError::Network)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError { status, message });
        }

        let data: SearchResponse = response.json().await.map_err(ProviderError::Network)?;
        self.extract_attractions(data, destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockTextGenerator;

    fn client(llm: MockTextGenerator) -> SerpApiAttractionClient {
        SerpApiAttractionClient {
            api_key: "test".to_string(),
            base_url: "https://serpapi.com".to_string(),
            http: Client::new(),
            llm: Arc::new(llm),
        }
    }

    fn search_data() -> SearchResponse {
        serde_json::from_value(serde_json::json!({
            "organic_results": [
                {"title": "Louvre Museum", "snippet": "World-famous art museum"},
                {"title": "Eiffel Tower", "snippet": "Iconic iron landmark"}
            ]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_structured_attractions() {
        let llm = MockTextGenerator::new(vec![
            r#"```json
[{"name": "Louvre Museum", "description": "Art museum", "category": "Museum", "rating": 4.7},
 {"name": "Eiffel Tower", "description": "Landmark", "category": "Landmark", "rating": 4.6}]
```"#,
        ]);

        let attractions = client(llm).extract_attractions(search_data(), "Paris").await.unwrap();
        assert_eq!(attractions.len(), 2);
        assert_eq!(attractions[0].name, "Louvre Museum");
        assert_eq!(attractions[1].category, "Landmark");
    }

    #[tokio::test]
    async fn test_unparseable_generation_degrades_to_empty() {
        let llm = MockTextGenerator::new(vec!["I could not find any attractions, sorry!"]);
        let attractions = client(llm).extract_attractions(search_data(), "Paris").await.unwrap();
        assert!(attractions.is_empty());
    }

    #[tokio::test]
    async fn test_no_organic_results_skips_generation() {
        let llm = MockTextGenerator::new(vec!["should never be used"]);
        let c = client(llm);
        let attractions = c.extract_attractions(SearchResponse::default(), "Paris").await.unwrap();
        assert!(attractions.is_empty());
    }

    #[test]
    fn test_summarize_results_caps_at_five() {
        let results: Vec<OrganicResult> = (0..8)
            .map(|i| OrganicResult {
                title: format!("Place {}", i),
                snippet: "desc".to_string(),
            })
            .collect();
        let text = SerpApiAttractionClient::summarize_results(&results);
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("- Place 0: desc"));
    }
}
