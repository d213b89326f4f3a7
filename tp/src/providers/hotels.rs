//! SerpAPI google_hotels adapter

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{HotelProvider, ProviderError};
use crate::config::ApiEndpoint;
use crate::domain::{HotelOption, sort_hotels_by_price};

/// Raw property entries considered per search
const MAX_RAW_HOTELS: usize = 10;

/// Amenity tags retained per hotel
const MAX_AMENITIES: usize = 5;

/// Parameters for one hotel search
#[derive(Debug, Clone)]
pub struct HotelQuery {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub currency: String,

    /// Per-night price ceiling from the budget policy
    pub budget_per_night: f64,
}

/// SerpAPI google_hotels client
pub struct SerpApiHotelClient {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Default, Deserialize)]
struct HotelsResponse {
    #[serde(default)]
    properties: Vec<RawProperty>,
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    rate_per_night: Option<RawRate>,
    #[serde(default)]
    overall_rating: Option<f64>,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRate {
    #[serde(default)]
    lowest: String,
}

impl SerpApiHotelClient {
    /// Create a new client from endpoint configuration
    pub fn from_config(config: &ApiEndpoint) -> Result<Self, ProviderError> {
        debug!(base_url = %config.base_url, "SerpApiHotelClient::from_config: called");
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
        })
    }

    /// Parse `"$1,234"`-style nightly rates
    fn parse_rate(raw: &str) -> Option<f64> {
        raw.replace(['$', ','], "").trim().parse().ok()
    }

    /// Map raw properties into price-sorted options under the nightly budget
    fn parse_hotels(&self, data: HotelsResponse, budget_per_night: f64) -> Vec<HotelOption> {
        debug!(properties = data.properties.len(), %budget_per_night, "parse_hotels: called");
        let mut hotels = Vec::new();

        for prop in data.properties.into_iter().take(MAX_RAW_HOTELS) {
            let price = prop
                .rate_per_night
                .as_ref()
                .and_then(|r| Self::parse_rate(&r.lowest))
                .unwrap_or(0.0);

            if price == 0.0 || price > budget_per_night {
                debug!(%price, "parse_hotels: outside nightly budget, skipped");
                continue;
            }

            let mut amenities = prop.amenities;
            amenities.truncate(MAX_AMENITIES);

            hotels.push(HotelOption {
                name: prop.name.unwrap_or_else(|| "Unknown Hotel".to_string()),
                location: prop.description,
                price_per_night: price,
                rating: prop.overall_rating,
                amenities,
                url: prop.link,
                distance_from_center: None,
            });
        }

        sort_hotels_by_price(&mut hotels);
        debug!(parsed = hotels.len(), "parse_hotels: done");
        hotels
    }
}

#[async_trait]
impl HotelProvider for SerpApiHotelClient {
    async fn search(&self, query: &HotelQuery) -> Result<Vec<HotelOption>, ProviderError> {
        debug!(destination = %query.destination, check_in = %query.check_in, "search: called");

        let url = format!("{}/search.json", self.base_url);
        let q = format!("hotels in {}", query.destination);

        let params = [
            ("engine", "google_hotels".to_string()),
            ("q", q),
            ("check_in_date", query.check_in.to_string()),
            ("check_out_date", query.check_out.to_string()),
            ("adults", query.adults.to_string()),
            ("currency", query.currency.clone()),
            ("gl", "us".to_string()),
            ("hl", "en".to_string()),
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

        let data: HotelsResponse = response.json().await.map_err(ProviderError::Network)?;
        Ok(self.parse_hotels(data, query.budget_per_night))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SerpApiHotelClient {
        SerpApiHotelClient {
            api_key: "test".to_string(),
            base_url: "https://serpapi.com".to_string(),
            http: Client::new(),
        }
    }

    fn raw(name: &str, rate: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "description": "Near the center",
            "rate_per_night": {"lowest": rate},
            "overall_rating": 4.2,
            "amenities": ["Wifi", "Pool", "Gym", "Spa", "Bar", "Parking"],
            "link": "https://example.com"
        })
    }

    #[test]
    fn test_parse_filters_and_sorts() {
        let data: HotelsResponse = serde_json::from_value(serde_json::json!({
            "properties": [raw("Pricey", "$300"), raw("Cheap", "$70"), raw("Mid", "$85")]
        }))
        .unwrap();

        let hotels = client().parse_hotels(data, 90.0);
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name, "Cheap");
        assert_eq!(hotels[1].name, "Mid");
        // Amenity list is capped
        assert_eq!(hotels[0].amenities.len(), 5);
    }

    #[test]
    fn test_parse_rate_strips_currency_formatting() {
        assert_eq!(SerpApiHotelClient::parse_rate("$1,234"), Some(1234.0));
        assert_eq!(SerpApiHotelClient::parse_rate("88"), Some(88.0));
        assert_eq!(SerpApiHotelClient::parse_rate("n/a"), None);
    }

    #[test]
    fn test_parse_skips_unpriced_properties() {
        let data: HotelsResponse = serde_json::from_value(serde_json::json!({
            "properties": [
                {"name": "No rate", "description": ""},
                {"name": "Zero", "description": "", "rate_per_night": {"lowest": "$0"}},
                raw("Fine", "$60")
            ]
        }))
        .unwrap();

        let hotels = client().parse_hotels(data, 90.0);
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Fine");
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(client().parse_hotels(HotelsResponse::default(), 90.0).is_empty());
    }
}
