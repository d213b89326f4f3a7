//! Alternative-suggestion step
//!
//! Terminal branch for runs the gates rejected. Renders a reason-specific
//! prompt, asks for alternative destinations, and appends the suggestion
//! text under a banner. Every exit path ends the run at the terminal step,
//! generation failure included.

use std::sync::Arc;
use tracing::{debug, warn};

use super::StepError;
use crate::llm::{GenerationRequest, TextGenerator};
use crate::prompts;
use crate::domain::TripRequest;
use crate::state::{AlternativeReason, PlanningState, Step};

const BANNER_WIDTH: usize = 60;

/// Human-readable reason line for the prompt and the banner
fn reason_text(state: &PlanningState, request: &TripRequest) -> String {
    match state.alternative_reason.unwrap_or(AlternativeReason::Unknown) {
        AlternativeReason::UnfavorableWeather => match &state.weather_data {
            Some(w) => match &w.alert {
                Some(alert) => format!("unfavorable weather ({}; {})", w.summary(), alert),
                None => format!("unfavorable weather ({})", w.summary()),
            },
            None => "unfavorable weather conditions (weather data unavailable)".to_string(),
        },
        AlternativeReason::NoFlightsAvailable => format!(
            "no flights available from {} to {} on {}",
            request.origin, request.destination, request.start_date
        ),
        AlternativeReason::FlightsTooExpensive => match state.expensive_flight_price {
            Some(price) => {
                let share = price / request.budget * 100.0;
                format!("flights too expensive (cheapest: ${:.2}, {:.0}% of budget)", price, share)
            }
            None => "flights exceed the budget".to_string(),
        },
        AlternativeReason::Unknown => "planning constraints".to_string(),
    }
}

fn capitalized(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn banner(destination: &str, reason: &str, budget: f64) -> String {
    let line = "─".repeat(BANNER_WIDTH);
    format!(
        "{line}\n💡 ALTERNATIVE DESTINATIONS\n{line}\n📍 Original: {destination}\n⚠️  Issue: {issue}\n💰 Budget: ${budget:.2}\n{line}",
        issue = capitalized(reason),
    )
}

pub(super) async fn suggest_alternatives(
    llm: &Arc<dyn TextGenerator>,
    state: &mut PlanningState,
) -> Result<(), StepError> {
    debug!("suggest_alternatives: called");
    let request = state.require_request()?;

    let reason = reason_text(state, &request);
    debug!(%reason, "suggest_alternatives: branch reason");

    let context = serde_json::json!({
        "destination": request.destination,
        "reason": reason,
        "budget": request.budget,
        "travel_type": request.travel_type.to_string(),
        "duration": request.duration_days,
        "origin": request.origin,
    });

    match prompts::render("alternatives", &context) {
        Ok(prompt) => {
            match llm.generate(GenerationRequest::new(prompts::ALTERNATIVES_SYSTEM, prompt)).await {
                Ok(response) => {
                    let header = banner(&request.destination, &reason, request.budget);
                    state.push_message(format!("{}\n{}", header, response.trim()));
                }
                Err(e) => {
                    warn!(error = %e, "suggest_alternatives: generation failed");
                    state.record_error(format!("Alternative suggestion failed: {}", e));
                    state.push_message(format!("❌ Could not generate alternatives: {}", e));
                }
            }
        }
        Err(e) => {
            state.record_error(format!("Alternative prompt failed: {}", e));
            state.push_message(format!("❌ Could not generate alternatives: {}", e));
        }
    }

    // Terminal regardless of how generation went
    state.current_step = Step::AlternativesSuggested;
    Ok(())
}
