//! Branch predicates for the two conditional gates
//!
//! Pure functions over planning state; the engine applies the returned
//! decision. The flight gate re-checks the budget share itself because the
//! adapter's pre-filter cannot be assumed to have happened.

use tracing::debug;

use crate::config::BudgetPolicy;
use crate::state::{AlternativeReason, PlanningState};

/// Outcome of the weather gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherDecision {
    ProceedToFlights,
    SuggestAlternatives,
}

/// Outcome of the flight availability/budget gate
#[derive(Debug, Clone, PartialEq)]
pub enum FlightDecision {
    ProceedToHotels,
    SuggestAlternatives {
        reason: AlternativeReason,
        /// Cheapest price when it was the budget that failed
        expensive_price: Option<f64>,
    },
}

/// Weather gate: missing or unfavorable weather routes to alternatives
pub fn weather_decision(state: &PlanningState) -> WeatherDecision {
    let favorable = state.weather_data.as_ref().is_some_and(|w| w.is_favorable);
    debug!(%favorable, "weather_decision: called");

    if favorable {
        WeatherDecision::ProceedToFlights
    } else {
        WeatherDecision::SuggestAlternatives
    }
}

/// Flight gate: no flights, or the cheapest one over the budget share,
/// routes to alternatives
pub fn flight_budget_decision(state: &PlanningState, policy: &BudgetPolicy) -> FlightDecision {
    debug!(flights = state.flights.len(), "flight_budget_decision: called");

    let Some(request) = state.trip_request.as_ref() else {
        return FlightDecision::SuggestAlternatives {
            reason: AlternativeReason::Unknown,
            expensive_price: None,
        };
    };

    let Some(cheapest) = state.flights.iter().min_by(|a, b| a.price.total_cmp(&b.price)) else {
        return FlightDecision::SuggestAlternatives {
            reason: AlternativeReason::NoFlightsAvailable,
            expensive_price: None,
        };
    };

    if policy.exceeds_flight_share(cheapest.price, request.budget) {
        debug!(
            price = cheapest.price,
            share = policy.flight_share_of(cheapest.price, request.budget),
            "flight_budget_decision: over budget share"
        );
        return FlightDecision::SuggestAlternatives {
            reason: AlternativeReason::FlightsTooExpensive,
            expensive_price: Some(cheapest.price),
        };
    }

    FlightDecision::ProceedToHotels
}
