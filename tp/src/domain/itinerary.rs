//! Itinerary domain types
//!
//! DayPlan and its children are parsed from text-generation output, so their
//! serde shapes match the JSON schema the itinerary prompt demands. The
//! TripItinerary is assembled exactly once, at the final step, and is
//! immutable afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::travel::{Attraction, FlightOption, HotelOption};

/// One scheduled activity within a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Time-of-day label, e.g. `"Morning (9:00 AM - 12:00 PM)"`
    #[serde(default)]
    pub time_of_day: String,

    #[serde(default)]
    pub description: String,

    /// Travel time to reach the activity, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,

    /// Cost as free text, e.g. `"$25 per person"`; scraped, never parsed strictly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    #[serde(alias = "breakfast")]
    Breakfast,
    #[serde(alias = "lunch")]
    Lunch,
    #[serde(alias = "dinner")]
    Dinner,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
        }
    }
}

/// One meal suggestion within a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,

    #[serde(default)]
    pub suggestion: String,

    /// Cost as free text, same lossy convention as activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

/// Single day of the generated itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index, contiguous across the trip
    pub day: u32,

    /// Date as emitted by generation; kept as text since the model owns it
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub activities: Vec<Activity>,

    #[serde(default)]
    pub meals: Vec<Meal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Complete trip itinerary, the terminal artifact of a successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripItinerary {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: f64,
    /// Derived: hotel + flight + attraction + scraped activity/meal costs
    pub estimated_cost: f64,
    /// Top hotels retained for display (at most 3)
    pub hotels: Vec<HotelOption>,
    /// Top flights retained for display (at most 2)
    pub flights: Vec<FlightOption>,
    pub daily_plans: Vec<DayPlan>,
    /// Full attraction list, unfiltered
    pub attractions: Vec<Attraction>,
    /// `"{temperature}°C, {condition}"`, or `"N/A"` when weather was missing
    pub weather_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_dates: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
