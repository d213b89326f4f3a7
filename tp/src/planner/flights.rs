//! Flight search step
//!
//! Resolves airport codes, queries the flight adapter with the budget
//! ceiling, and retains the cheapest options. The budget verdict itself is
//! the gate's job; this step only reports what it found.

use std::sync::Arc;
use tracing::{debug, warn};

use super::StepError;
use crate::config::BudgetPolicy;
use crate::llm::TextGenerator;
use crate::providers::{FlightProvider, FlightQuery, resolve_airport_code};
use crate::state::{PlanningState, Step};

/// Flights kept on state after price sorting
const MAX_FLIGHTS_RETAINED: usize = 3;

pub(super) async fn search_flights(
    provider: &Arc<dyn FlightProvider>,
    llm: &Arc<dyn TextGenerator>,
    policy: &BudgetPolicy,
    state: &mut PlanningState,
) -> Result<(), StepError> {
    debug!("search_flights: called");
    let request = state.require_request()?;

    let origin_code = resolve_airport_code(llm, &request.origin).await;
    let destination_code = resolve_airport_code(llm, &request.destination).await;
    debug!(%origin_code, %destination_code, "search_flights: codes resolved");

    let query = FlightQuery {
        origin_code,
        destination_code,
        date: request.start_date,
        return_date: Some(request.end_date),
        currency: request.currency.clone(),
        budget_ceiling: policy.flight_ceiling(request.budget),
    };

    match provider.search(&query).await {
        Ok(flights) => {
            debug!(count = flights.len(), "search_flights: fetched");
            if flights.is_empty() {
                state.push_message("❌ No flights available for this route");
            } else {
                // Adapters sort ascending but the gate must not depend on it
                let cheapest = flights
                    .iter()
                    .map(|f| f.price)
                    .fold(f64::INFINITY, f64::min);
                if policy.exceeds_flight_share(cheapest, request.budget) {
                    state.push_message(format!(
                        "⚠️ Flights too expensive: ${:.2} ({:.0}% of budget)",
                        cheapest,
                        policy.flight_share_of(cheapest, request.budget)
                    ));
                } else {
                    state.push_message(format!("✅ Found {} flights from {}", flights.len(), request.origin));
                }
            }
            state.flights = flights.into_iter().take(MAX_FLIGHTS_RETAINED).collect();
            state.current_step = Step::FlightsFound;
        }
        Err(e) => {
            warn!(error = %e, "search_flights: adapter failed");
            state.record_error(format!("Flight search failed: {}", e));
            state.push_message("⚠️ Flight search had issues");
        }
    }

    Ok(())
}
