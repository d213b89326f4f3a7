//! SerpAPI google_flights adapter

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{FlightProvider, ProviderError};
use crate::config::ApiEndpoint;
use crate::domain::{FlightOption, sort_flights_by_price};

/// Raw result entries considered per search
const MAX_RAW_FLIGHTS: usize = 10;

/// Parameters for one flight search
#[derive(Debug, Clone)]
pub struct FlightQuery {
    /// 3-letter IATA code of the departure airport
    pub origin_code: String,

    /// 3-letter IATA code of the arrival airport
    pub destination_code: String,

    pub date: NaiveDate,

    /// Return date; present for round trips
    pub return_date: Option<NaiveDate>,

    pub currency: String,

    /// Flight sub-budget; options priced at or above this are dropped
    pub budget_ceiling: f64,
}

/// SerpAPI google_flights client
pub struct SerpApiFlightClient {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Default, Deserialize)]
struct FlightsResponse {
    #[serde(default)]
    best_flights: Vec<RawFlight>,
    #[serde(default)]
    other_flights: Vec<RawFlight>,
}

#[derive(Debug, Deserialize)]
struct RawFlight {
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    flights: Vec<RawSegment>,
    #[serde(default)]
    total_duration: u32,
    #[serde(default)]
    booking_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSegment {
    #[serde(default)]
    airline: String,
    #[serde(default)]
    departure_airport: RawAirportTime,
    #[serde(default)]
    arrival_airport: RawAirportTime,
}

#[derive(Debug, Default, Deserialize)]
struct RawAirportTime {
    #[serde(default)]
    time: String,
}

impl SerpApiFlightClient {
    /// Create a new client from endpoint configuration
    pub fn from_config(config: &ApiEndpoint) -> Result<Self, ProviderError> {
        debug!(base_url = %config.base_url, "SerpApiFlightClient::from_config: called");
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

    /// Map raw results into price-sorted options under the sub-budget
    fn parse_flights(&self, data: FlightsResponse, budget_ceiling: f64) -> Vec<FlightOption> {
        debug!(
            best = data.best_flights.len(),
            other = data.other_flights.len(),
            %budget_ceiling,
            "parse_flights: called"
        );

        let mut flights = Vec::new();

        let raw = data.best_flights.into_iter().chain(data.other_flights).take(MAX_RAW_FLIGHTS);

        for entry in raw {
            let Some(price) = entry.price else {
                debug!("parse_flights: entry without price skipped");
                continue;
            };
            if price >= budget_ceiling {
                debug!(%price, "parse_flights: over flight sub-budget, skipped");
                continue;
            }
            let Some(first) = entry.flights.first() else {
                warn!("parse_flights: entry without segments skipped");
                continue;
            };
            let Some(last) = entry.flights.last() else {
                continue;
            };

            flights.push(FlightOption {
                airline: first.airline.clone(),
                departure_time: first.departure_airport.time.clone(),
                arrival_time: last.arrival_airport.time.clone(),
                duration: format!("{} min", entry.total_duration),
                price,
                stops: (entry.flights.len() - 1) as u32,
                booking_url: entry.booking_token,
            });
        }

        sort_flights_by_price(&mut flights);
        debug!(parsed = flights.len(), "parse_flights: done");
        flights
    }
}

#[async_trait]
impl FlightProvider for SerpApiFlightClient {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOption>, ProviderError> {
        debug!(
            origin = %query.origin_code,
            destination = %query.destination_code,
            date = %query.date,
            "search: called"
        );

        let url = format!("{}/search.json", self.base_url);
        let outbound = query.date.to_string();
        // SerpAPI flight type: 1 = round trip, 2 = one way
        let trip_type = if query.return_date.is_some() { "1" } else { "2" };

        let mut params = vec![
            ("engine".to_string(), "google_flights".to_string()),
            ("departure_id".to_string(), query.origin_code.clone()),
            ("arrival_id".to_string(), query.destination_code.clone()),
            ("outbound_date".to_string(), outbound),
            ("currency".to_string(), query.currency.clone()),
            ("hl".to_string(), "en".to_string()),
            ("gl".to_string(), "us".to_string()),
            ("type".to_string(), trip_type.to_string()),
            ("api_key".to_string(), self.api_key.clone()),
        ];
        if let Some(return_date) = query.return_date {
            params.push(("return_date".to_string(), return_date.to_string()));
        }

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

        let data: FlightsResponse = response.json().await.map_err(ProviderError::Network)?;
        Ok(self.parse_flights(data, query.budget_ceiling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SerpApiFlightClient {
        SerpApiFlightClient {
            api_key: "test".to_string(),
            base_url: "https://serpapi.com".to_string(),
            http: Client::new(),
        }
    }

    fn raw(price: f64, airline: &str, segments: usize) -> serde_json::Value {
        let segment = |i: usize| {
            serde_json::json!({
                "airline": airline,
                "departure_airport": {"time": format!("2026-09-01 0{}:00", i)},
                "arrival_airport": {"time": format!("2026-09-01 1{}:00", i)}
            })
        };
        serde_json::json!({
            "price": price,
            "total_duration": 465,
            "booking_token": "tok",
            "flights": (0..segments).map(segment).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_parse_merges_best_and_other_and_sorts() {
        let data: FlightsResponse = serde_json::from_value(serde_json::json!({
            "best_flights": [raw(820.0, "Delta", 1)],
            "other_flights": [raw(640.0, "Iberia", 2), raw(710.0, "AF", 1)]
        }))
        .unwrap();

        let flights = client().parse_flights(data, 1200.0);
        assert_eq!(flights.len(), 3);
        assert_eq!(flights[0].airline, "Iberia");
        assert_eq!(flights[0].stops, 1);
        assert_eq!(flights[0].duration, "465 min");
        assert_eq!(flights[2].airline, "Delta");
    }

    #[test]
    fn test_parse_filters_at_ceiling() {
        let data: FlightsResponse = serde_json::from_value(serde_json::json!({
            "best_flights": [raw(1200.0, "AtCeiling", 1), raw(1199.0, "Under", 1), raw(1500.0, "Over", 1)]
        }))
        .unwrap();

        let flights = client().parse_flights(data, 1200.0);
        // At-or-above the ceiling is dropped
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airline, "Under");
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let data: FlightsResponse = serde_json::from_value(serde_json::json!({
            "best_flights": [
                {"total_duration": 100, "flights": [{"airline": "NoPrice"}]},
                {"price": 500.0, "total_duration": 100, "flights": []},
                raw(600.0, "Good", 1)
            ]
        }))
        .unwrap();

        let flights = client().parse_flights(data, 1200.0);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airline, "Good");
    }

    #[test]
    fn test_parse_empty_response() {
        let data = FlightsResponse::default();
        assert!(client().parse_flights(data, 1200.0).is_empty());
    }
}
