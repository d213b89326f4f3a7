//! Weather domain types
//!
//! A WeatherSnapshot is produced once per planning run by the weather adapter
//! and read-only afterwards. Favorability and the alert text are derived here
//! so the rule lives in exactly one place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Favorable temperature band, inclusive, in °C
const TEMP_MIN_C: f64 = 15.0;
const TEMP_MAX_C: f64 = 30.0;

/// Precipitation chance at or above this percentage is unfavorable
const RAIN_CHANCE_LIMIT_PCT: f64 = 10.0;

/// Weather condition reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
    Fog,
    /// Anything else the provider reports, preserved verbatim
    Other(String),
}

impl WeatherCondition {
    /// Severe conditions rule out a favorable forecast regardless of temperature
    pub fn is_severe(&self) -> bool {
        matches!(self, Self::Thunderstorm | Self::Snow)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "Clear"),
            Self::Clouds => write!(f, "Clouds"),
            Self::Rain => write!(f, "Rain"),
            Self::Snow => write!(f, "Snow"),
            Self::Thunderstorm => write!(f, "Thunderstorm"),
            Self::Drizzle => write!(f, "Drizzle"),
            Self::Mist => write!(f, "Mist"),
            Self::Fog => write!(f, "Fog"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            "Thunderstorm" => Self::Thunderstorm,
            "Drizzle" => Self::Drizzle,
            "Mist" => Self::Mist,
            "Fog" => Self::Fog,
            _ => Self::Other(s),
        }
    }
}

impl From<WeatherCondition> for String {
    fn from(c: WeatherCondition) -> Self {
        c.to_string()
    }
}

/// Weather information for the destination on the intended travel date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub date: NaiveDate,
    /// Temperature in °C
    pub temperature: f64,
    pub condition: WeatherCondition,
    /// Relative humidity in percent
    pub humidity: u32,
    pub wind_speed: f64,
    /// Chance of precipitation in percent
    pub precipitation_chance: f64,
    /// Derived: whether conditions support proceeding with the trip
    pub is_favorable: bool,
    /// Set iff unfavorable; exactly one explanatory string
    pub alert: Option<String>,
}

impl WeatherSnapshot {
    /// Assess raw provider readings into a snapshot with derived favorability.
    ///
    /// Favorable iff temperature is within [15, 30] °C, the condition is not
    /// severe, and precipitation chance is below 10%. When unfavorable, the
    /// alert is chosen by priority: cold, hot, severe condition, rain chance.
    #[allow(clippy::too_many_arguments)]
    pub fn assess(
        location: impl Into<String>,
        date: NaiveDate,
        temperature: f64,
        condition: WeatherCondition,
        humidity: u32,
        wind_speed: f64,
        precipitation_chance: f64,
    ) -> Self {
        let is_favorable = (TEMP_MIN_C..=TEMP_MAX_C).contains(&temperature)
            && !condition.is_severe()
            && precipitation_chance < RAIN_CHANCE_LIMIT_PCT;

        let alert = if is_favorable {
            None
        } else if temperature < TEMP_MIN_C {
            Some("Cold weather expected.".to_string())
        } else if temperature > TEMP_MAX_C {
            Some("Very hot weather expected.".to_string())
        } else if condition.is_severe() {
            Some(format!("Severe weather: {}", condition))
        } else {
            Some("High chance of rain.".to_string())
        };

        debug!(%is_favorable, ?alert, "WeatherSnapshot::assess: derived");

        Self {
            location: location.into(),
            date,
            temperature,
            condition,
            humidity,
            wind_speed,
            precipitation_chance,
            is_favorable,
            alert,
        }
    }

    /// Short human-readable summary, e.g. `"22°C, Clear"`
    pub fn summary(&self) -> String {
        format!("{}°C, {}", self.temperature, self.condition)
    }
}
