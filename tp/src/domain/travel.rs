//! Flight, hotel and attraction search results
//!
//! Typed records the provider adapters return. Flight and hotel lists are
//! price-sorted ascending by the adapters before they reach planning state.

use serde::{Deserialize, Serialize};

/// A single flight search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOption {
    pub airline: String,
    pub departure_time: String,
    pub arrival_time: String,
    /// Total travel time, e.g. `"465 min"`
    pub duration: String,
    pub price: f64,
    /// Number of stops (0 for direct)
    #[serde(default)]
    pub stops: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

/// A single hotel search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOption {
    pub name: String,
    pub location: String,
    pub price_per_night: f64,
    /// 0-5 star rating when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_center: Option<f64>,
}

/// A tourist attraction at the destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Entry cost when known; missing cost counts as free in estimates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Sort flights cheapest-first, the order every consumer assumes
pub fn sort_flights_by_price(flights: &mut [FlightOption]) {
    flights.sort_by(|a, b| a.price.total_cmp(&b.price));
}

/// Sort hotels cheapest-first
pub fn sort_hotels_by_price(hotels: &mut [HotelOption]) {
    hotels.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night));
}
