//! OpenWeatherMap weather adapter

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ProviderError, WeatherProvider};
use crate::config::ApiEndpoint;
use crate::domain::{WeatherCondition, WeatherSnapshot};

/// OpenWeatherMap current-weather client
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
    #[serde(default)]
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

impl OpenWeatherClient {
    /// Create a new client from endpoint configuration
    pub fn from_config(config: &ApiEndpoint) -> Result<Self, ProviderError> {
        debug!(base_url = %config.base_url, "OpenWeatherClient::from_config: called");
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

    /// Map the raw API payload into an assessed snapshot
    fn parse_response(&self, data: OwmResponse, city: &str, date: NaiveDate) -> Result<WeatherSnapshot, ProviderError> {
        debug!(%city, "parse_response: called");
        let condition_name = data
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or_else(|| ProviderError::InvalidResponse("No weather condition in response".to_string()))?;

        let condition: WeatherCondition = condition_name.into();
        // OWM reports recent rain volume under rain.1h; absent means 0
        let rain_chance = data.rain.map(|r| r.one_hour).unwrap_or(0.0);

        Ok(WeatherSnapshot::assess(
            city,
            date,
            data.main.temp,
            condition,
            data.main.humidity,
            data.wind.speed,
            rain_chance,
        ))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str, date: NaiveDate) -> Result<WeatherSnapshot, ProviderError> {
        debug!(%city, %date, "current: called");
        let url = format!("{}/data/2.5/weather", self.base_url);

        let response = self
            .http
            .get(url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await
            .map_err(ProviderError::Network)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "current: non-success status");
            return Err(ProviderError::ApiError { status, message });
        }

        let data: OwmResponse = response.json().await.map_err(ProviderError::Network)?;
        self.parse_response(data, city, date)
    }
}
