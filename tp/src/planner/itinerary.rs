//! Itinerary generation step
//!
//! The only step that composes everything: it refuses to run without at
//! least one flight, renders the itinerary prompt from the accumulated
//! search results, parses the generated day plans, and assembles the final
//! TripItinerary with the cost estimate. Generation failures leave the
//! itinerary absent but never abort the run.

use std::sync::Arc;
use tracing::{debug, warn};

use super::{StepError, cost};
use crate::domain::{TripItinerary, DayPlan};
use crate::llm::{GenerationRequest, TextGenerator, extract};
use crate::state::{PlanningState, Step};
use crate::prompts;
use serde::Deserialize;

/// Hotels shown in the prompt and kept on the itinerary
const MAX_ITINERARY_HOTELS: usize = 3;
/// Flights kept on the itinerary
const MAX_ITINERARY_FLIGHTS: usize = 2;
/// Attractions listed in the prompt
const MAX_PROMPT_ATTRACTIONS: usize = 8;

#[derive(Debug, Deserialize)]
struct GeneratedItinerary {
    #[serde(default)]
    daily_plans: Vec<DayPlan>,
}

/// Parse day plans out of raw generation output, tolerating fences and
/// surrounding chatter. Anything unparseable yields an empty list.
fn parse_daily_plans(response: &str) -> Vec<DayPlan> {
    debug!(response_len = response.len(), "parse_daily_plans: called");
    let Some(json) = extract::extract_json_object(response) else {
        debug!("parse_daily_plans: no JSON object in response");
        return Vec::new();
    };
    match serde_json::from_str::<GeneratedItinerary>(&json) {
        Ok(generated) => generated.daily_plans,
        Err(e) => {
            debug!(error = %e, "parse_daily_plans: object did not deserialize");
            Vec::new()
        }
    }
}

fn hotels_text(state: &PlanningState) -> String {
    if state.hotels.is_empty() {
        return "Budget accommodation options available".to_string();
    }
    state
        .hotels
        .iter()
        .take(MAX_ITINERARY_HOTELS)
        .map(|h| {
            format!(
                "- {}: ${}/night (⭐ {}/5) - {}",
                h.name,
                h.price_per_night,
                h.rating.unwrap_or(0.0),
                h.location
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn attractions_text(state: &PlanningState) -> String {
    if state.attractions.is_empty() {
        return "Popular tourist attractions in the area".to_string();
    }
    state
        .attractions
        .iter()
        .take(MAX_PROMPT_ATTRACTIONS)
        .map(|a| format!("- {} ({}): {}", a.name, a.category, a.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) async fn create_itinerary(
    llm: &Arc<dyn TextGenerator>,
    state: &mut PlanningState,
) -> Result<(), StepError> {
    debug!("create_itinerary: called");
    let request = state.require_request()?;

    if state.flights.is_empty() {
        warn!("create_itinerary: no flights on state");
        state.record_error("No flights available - cannot generate itinerary");
        state.push_message("❌ Itinerary not generated: No flights available for the requested route");
        return Ok(());
    }

    let weather_summary = state
        .weather_data
        .as_ref()
        .map(|w| w.summary())
        .unwrap_or_else(|| "N/A".to_string());

    let context = serde_json::json!({
        "duration": request.duration_days,
        "destination": request.destination,
        "travel_type": request.travel_type.to_string(),
        "budget": request.budget,
        "weather": weather_summary,
        "num_travelers": request.num_travelers,
        "hotels": hotels_text(state),
        "attractions": attractions_text(state),
        "start_date": request.start_date.to_string(),
    });

    let prompt = match prompts::render("itinerary", &context) {
        Ok(prompt) => prompt,
        Err(e) => {
            state.record_error(format!("Itinerary prompt failed: {}", e));
            state.push_message("❌ Could not generate complete itinerary");
            return Ok(());
        }
    };

    let response = match llm.generate(GenerationRequest::new(prompts::ITINERARY_SYSTEM, prompt)).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "create_itinerary: generation failed");
            state.record_error(format!("Itinerary generation failed: {}", e));
            state.push_message("❌ Could not generate complete itinerary");
            return Ok(());
        }
    };

    let daily_plans = parse_daily_plans(&response);
    if daily_plans.is_empty() {
        state.record_error("LLM did not generate daily plans");
    }

    let breakdown = cost::estimate(
        &state.hotels,
        &state.flights,
        &state.attractions,
        &daily_plans,
        request.duration_days,
    );

    let itinerary = TripItinerary {
        destination: request.destination.clone(),
        start_date: request.start_date,
        end_date: request.end_date,
        total_budget: request.budget,
        estimated_cost: breakdown.total(),
        hotels: state.hotels.iter().take(MAX_ITINERARY_HOTELS).cloned().collect(),
        flights: state.flights.iter().take(MAX_ITINERARY_FLIGHTS).cloned().collect(),
        daily_plans,
        attractions: state.attractions.clone(),
        weather_summary,
        alternative_dates: None,
        notes: Some(format!("Created for {} travel", request.travel_type)),
    };

    debug!(estimated_cost = itinerary.estimated_cost, days = itinerary.daily_plans.len(), "create_itinerary: assembled");
    state.itinerary = Some(itinerary);
    state.current_step = Step::ItineraryComplete;
    state.push_message("✅ Itinerary created successfully!");

    Ok(())
}
