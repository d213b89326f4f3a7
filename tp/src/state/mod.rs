//! Planning state threaded through the step graph
//!
//! PlanningState is the mutable aggregate each step reads and extends. The
//! error and message logs are append-only for the life of a run; snapshots
//! handed to the presentation layer are plain clones.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Attraction, FlightOption, HotelOption, TripItinerary, TripRequest, WeatherSnapshot};

/// Step labels for `current_step`, the fixed vocabulary of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Init,
    WeatherChecked,
    WeatherUnfavorable,
    FlightsFound,
    FlightsIssue,
    HotelsFound,
    AttractionsFound,
    ItineraryComplete,
    AlternativesSuggested,
}

impl Step {
    /// Terminal steps end the run; nothing executes after them
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ItineraryComplete | Self::AlternativesSuggested)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::WeatherChecked => write!(f, "weather_checked"),
            Self::WeatherUnfavorable => write!(f, "weather_unfavorable"),
            Self::FlightsFound => write!(f, "flights_found"),
            Self::FlightsIssue => write!(f, "flights_issue"),
            Self::HotelsFound => write!(f, "hotels_found"),
            Self::AttractionsFound => write!(f, "attractions_found"),
            Self::ItineraryComplete => write!(f, "itinerary_complete"),
            Self::AlternativesSuggested => write!(f, "alternatives_suggested"),
        }
    }
}

/// Why the run branched to the alternatives path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeReason {
    UnfavorableWeather,
    NoFlightsAvailable,
    FlightsTooExpensive,
    Unknown,
}

impl std::fmt::Display for AlternativeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnfavorableWeather => write!(f, "unfavorable_weather"),
            Self::NoFlightsAvailable => write!(f, "no_flights_available"),
            Self::FlightsTooExpensive => write!(f, "flights_too_expensive"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Mutable aggregate accumulated across the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningState {
    /// The request driving the run; checked defensively at every step
    pub trip_request: Option<TripRequest>,

    /// Weather at the destination, fetched once by the weather step
    pub weather_data: Option<WeatherSnapshot>,

    /// Retained hotels, price-sorted ascending (top 5)
    pub hotels: Vec<HotelOption>,

    /// Retained flights, price-sorted ascending (top 3)
    pub flights: Vec<FlightOption>,

    /// All attractions found at the destination
    pub attractions: Vec<Attraction>,

    /// Final itinerary, present only after a complete run
    pub itinerary: Option<TripItinerary>,

    /// Append-only error log
    pub errors: Vec<String>,

    /// Append-only human-readable progress log
    pub messages: Vec<String>,

    /// Label of the last completed step
    pub current_step: Step,

    /// Set when the weather gate flags the destination for replanning
    pub should_replan: bool,

    /// Why the alternatives branch was taken, if it was
    pub alternative_reason: Option<AlternativeReason>,

    /// Cheapest flight price when the budget gate rejected it
    pub expensive_flight_price: Option<f64>,
}

impl PlanningState {
    /// Fresh state for a new run
    pub fn new(request: TripRequest) -> Self {
        debug!(origin = %request.origin, destination = %request.destination, "PlanningState::new: called");
        Self {
            trip_request: Some(request),
            weather_data: None,
            hotels: Vec::new(),
            flights: Vec::new(),
            attractions: Vec::new(),
            itinerary: None,
            errors: Vec::new(),
            messages: Vec::new(),
            current_step: Step::Init,
            should_replan: false,
            alternative_reason: None,
            expensive_flight_price: None,
        }
    }

    /// Append to the error log (never removed or reordered)
    pub fn record_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        debug!(%error, "PlanningState::record_error: called");
        self.errors.push(error);
    }

    /// Append to the progress log (never removed or reordered)
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// The run has reached a terminal step
    pub fn is_terminal(&self) -> bool {
        self.current_step.is_terminal()
    }

    /// The request every step needs; its absence is the one fatal condition
    pub fn require_request(&mut self) -> Result<TripRequest, crate::planner::StepError> {
        match self.trip_request.clone() {
            Some(request) => Ok(request),
            None => {
                self.record_error("Trip request is missing");
                Err(crate::planner::StepError::MissingTripRequest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TravelType;
    use chrono::NaiveDate;

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
    fn test_new_state_starts_at_init() {
        let state = PlanningState::new(request());
        assert_eq!(state.current_step, Step::Init);
        assert!(!state.is_terminal());
        assert!(state.errors.is_empty());
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_logs_append_in_order() {
        let mut state = PlanningState::new(request());
        state.record_error("first");
        state.record_error("second");
        state.push_message("hello");
        assert_eq!(state.errors, vec!["first", "second"]);
        assert_eq!(state.messages, vec!["hello"]);
    }

    #[test]
    fn test_terminal_steps() {
        assert!(Step::ItineraryComplete.is_terminal());
        assert!(Step::AlternativesSuggested.is_terminal());
        assert!(!Step::Init.is_terminal());
        assert!(!Step::FlightsIssue.is_terminal());
        assert!(!Step::WeatherUnfavorable.is_terminal());
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(Step::WeatherChecked.to_string(), "weather_checked");
        assert_eq!(Step::AlternativesSuggested.to_string(), "alternatives_suggested");
        assert_eq!(AlternativeReason::FlightsTooExpensive.to_string(), "flights_too_expensive");
    }
}
