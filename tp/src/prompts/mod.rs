//! Prompt templates and rendering
//!
//! Templates are Handlebars, embedded at compile time. The system prompts are
//! fixed strings; the user-turn templates take per-run context.

pub mod embedded;

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

pub use embedded::get_embedded;

/// System prompt for itinerary synthesis
pub const ITINERARY_SYSTEM: &str = "You are an expert travel planner creating detailed day-by-day itineraries.\n\
You MUST provide complete information for each day including:\n\
1. Activities with specific times (Morning, Afternoon, Evening)\n\
2. THREE meal suggestions per day (Breakfast, Lunch, Dinner) with restaurant names\n\
3. Estimated costs for activities\n\
4. Travel times between locations\n\n\
Always return valid JSON in the exact format specified.";

/// System prompt for alternative-destination synthesis
pub const ALTERNATIVES_SYSTEM: &str = "You are a travel expert. Suggest 3 alternative destinations based on the issue.\n\
Focus on destinations that solve the specific problem (better weather, cheaper flights, or better availability).";

/// System prompt for airport-code resolution
pub const AIRPORT_SYSTEM: &str = "You are an aviation expert. Return ONLY the 3-letter IATA airport code \
for the main international airport of the given city. No explanation, just the code.";

/// System prompt for attraction extraction
pub const ATTRACTIONS_SYSTEM: &str = "You are a travel expert. Extract tourist attractions from search results.\n\
Return a JSON array with format: [{\"name\": \"...\", \"description\": \"...\", \"category\": \"...\", \"rating\": 4.5}]\n\
Categories: Museum, Landmark, Nature, Entertainment, Shopping, Religious, Historical";

/// Render an embedded template with the given context
pub fn render<T: Serialize>(name: &str, context: &T) -> Result<String> {
    debug!(%name, "render: called");
    let template = get_embedded(name).ok_or_else(|| eyre!("Unknown prompt template: {}", name))?;

    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(false);
    // Prompts are plain text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .render_template(template, context)
        .map_err(|e| eyre!("Failed to render prompt '{}': {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_airport_prompt() {
        let rendered = render("airport", &json!({ "city": "Paris" })).unwrap();
        assert!(rendered.contains("City: Paris"));
    }

    #[test]
    fn test_render_itinerary_prompt() {
        let rendered = render(
            "itinerary",
            &json!({
                "duration": 5,
                "destination": "Paris",
                "travel_type": "sightseeing",
                "budget": 2000.0,
                "num_travelers": 2,
                "weather": "22°C, Clear",
                "hotels": "- Hotel Lutetia: $250/night",
                "attractions": "- Louvre (Museum): world-class art",
                "start_date": "2026-09-01",
            }),
        )
        .unwrap();

        assert!(rendered.contains("Create a 5-day detailed itinerary for Paris."));
        assert!(rendered.contains("Hotel Lutetia"));
        assert!(rendered.contains("\"date\": \"2026-09-01\""));
        // The JSON schema block survives rendering intact
        assert!(rendered.contains("\"daily_plans\": ["));
    }

    #[test]
    fn test_render_alternatives_prompt() {
        let rendered = render(
            "alternatives",
            &json!({
                "destination": "Paris",
                "reason": "flights are too expensive ($1300.00, 65% of budget)",
                "budget": 2000.0,
                "travel_type": "sightseeing",
                "duration": 5,
                "origin": "New York",
            }),
        )
        .unwrap();

        assert!(rendered.contains("cannot proceed due to: flights are too expensive"));
        assert!(rendered.contains("flight cost from New York"));
    }

    #[test]
    fn test_render_unknown_template_fails() {
        assert!(render("nope", &json!({})).is_err());
    }
}
