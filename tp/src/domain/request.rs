//! Trip request domain type
//!
//! A TripRequest is the immutable value object capturing the user's ask.
//! It is created once from user input and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Travel style preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelType {
    Relaxation,
    Adventure,
    #[default]
    Sightseeing,
    Business,
    Family,
}

impl std::fmt::Display for TravelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relaxation => write!(f, "relaxation"),
            Self::Adventure => write!(f, "adventure"),
            Self::Sightseeing => write!(f, "sightseeing"),
            Self::Business => write!(f, "business"),
            Self::Family => write!(f, "family"),
        }
    }
}

impl std::str::FromStr for TravelType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxation" => Ok(Self::Relaxation),
            "adventure" => Ok(Self::Adventure),
            "sightseeing" => Ok(Self::Sightseeing),
            "business" => Ok(Self::Business),
            "family" => Ok(Self::Family),
            other => Err(RequestError::UnknownTravelType(other.to_string())),
        }
    }
}

/// Errors from trip request validation
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Origin must not be empty")]
    EmptyOrigin,

    #[error("Destination must not be empty")]
    EmptyDestination,

    #[error("End date {end} is before start date {start}")]
    DatesReversed { start: NaiveDate, end: NaiveDate },

    #[error("Budget must be positive, got {0}")]
    NonPositiveBudget(f64),

    #[error("Traveler count must be positive")]
    NoTravelers,

    #[error("Duration must be positive")]
    ZeroDuration,

    #[error("Unknown travel type: {0}")]
    UnknownTravelType(String),
}

/// The user's trip requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Origin/departure city
    pub origin: String,

    /// Destination city or country
    pub destination: String,

    /// Trip start date
    pub start_date: NaiveDate,

    /// Trip end date (never before start_date)
    pub end_date: NaiveDate,

    /// Trip duration in days (informational, may disagree with the dates)
    pub duration_days: u32,

    /// Total budget for the trip
    pub budget: f64,

    /// ISO currency code
    pub currency: String,

    /// Travel style
    pub travel_type: TravelType,

    /// Number of travelers
    pub num_travelers: u32,

    /// Free-text preference tags, in the order the user gave them
    pub preferences: Vec<String>,
}

impl TripRequest {
    /// Validate the cross-field invariants of a request
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.origin.trim().is_empty() {
            return Err(RequestError::EmptyOrigin);
        }
        if self.destination.trim().is_empty() {
            return Err(RequestError::EmptyDestination);
        }
        if self.end_date < self.start_date {
            return Err(RequestError::DatesReversed {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.budget <= 0.0 {
            return Err(RequestError::NonPositiveBudget(self.budget));
        }
        if self.num_travelers == 0 {
            return Err(RequestError::NoTravelers);
        }
        if self.duration_days == 0 {
            return Err(RequestError::ZeroDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            origin: "New York".to_string(),
            destination: "Paris".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
            duration_days: 5,
            budget: 2000.0,
            currency: "USD".to_string(),
            travel_type: TravelType::Sightseeing,
            num_travelers: 1,
            preferences: vec![],
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert!(matches!(req.validate(), Err(RequestError::DatesReversed { .. })));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut req = request();
        req.budget = 0.0;
        assert!(matches!(req.validate(), Err(RequestError::NonPositiveBudget(_))));
    }

    #[test]
    fn test_travel_type_round_trip() {
        for name in ["relaxation", "adventure", "sightseeing", "business", "family"] {
            let parsed: TravelType = name.parse().unwrap();
            assert_eq!(parsed.to_string(), name);
        }
        assert!("cruise".parse::<TravelType>().is_err());
    }
}
