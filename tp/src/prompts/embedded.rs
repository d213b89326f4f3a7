//! Embedded prompt templates
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Day-by-day itinerary synthesis prompt
pub const ITINERARY: &str = include_str!("../../prompts/itinerary.pmt");

/// Alternative-destination suggestion prompt
pub const ALTERNATIVES: &str = include_str!("../../prompts/alternatives.pmt");

/// Airport-code resolution prompt
pub const AIRPORT: &str = include_str!("../../prompts/airport.pmt");

/// Attraction extraction prompt
pub const ATTRACTIONS: &str = include_str!("../../prompts/attractions.pmt");

/// Get the embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "itinerary" => Some(ITINERARY),
        "alternatives" => Some(ALTERNATIVES),
        "airport" => Some(AIRPORT),
        "attractions" => Some(ATTRACTIONS),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_itinerary() {
        let template = get_embedded("itinerary").unwrap();
        assert!(template.contains("daily_plans"));
        assert!(template.contains("{{duration}}"));
        assert!(template.contains("Breakfast"));
        assert!(template.contains("estimated_cost"));
    }

    #[test]
    fn test_get_embedded_alternatives() {
        let template = get_embedded("alternatives").unwrap();
        assert!(template.contains("3 alternative destinations"));
        assert!(template.contains("{{reason}}"));
    }

    #[test]
    fn test_get_embedded_airport() {
        assert!(get_embedded("airport").unwrap().contains("{{city}}"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }
}
