//! Itinerary cost assembly
//!
//! The one nontrivial numeric algorithm in the workflow. Activity and meal
//! costs come back from generation as free text; we scrape the first
//! `$<integer>` in each field and ignore the rest. This is deliberately
//! lossy and must stay exactly as-is for compatibility.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{Attraction, DayPlan, FlightOption, HotelOption};

static DOLLAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([0-9]+)").expect("dollar regex"));

/// Cost estimate broken into its documented components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostBreakdown {
    /// Cheapest retained hotel × plan day count (or trip duration)
    pub hotel_cost: f64,
    /// Cheapest retained flight, counted once
    pub flight_cost: f64,
    /// Sum of attraction entry costs, missing counted as 0
    pub attraction_cost: f64,
    /// Scraped activity and meal costs across every day
    pub activity_meal_cost: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.hotel_cost + self.flight_cost + self.attraction_cost + self.activity_meal_cost
    }
}

/// First `$<integer>` in a free-text cost field, 0 when absent
///
/// `"$25 per person"` → 25; `"$25-30 per person"` → 25 (first match only);
/// `"around 25 dollars"` → 0.
pub fn scrape_dollar_amount(text: &str) -> u64 {
    DOLLAR_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Sum scraped costs over every activity and meal of every day
pub fn activity_meal_cost(daily_plans: &[DayPlan]) -> f64 {
    let mut total: u64 = 0;

    for day in daily_plans {
        for activity in &day.activities {
            if let Some(cost) = &activity.estimated_cost {
                total += scrape_dollar_amount(cost);
            }
        }
        for meal in &day.meals {
            if let Some(cost) = &meal.estimated_cost {
                total += scrape_dollar_amount(cost);
            }
        }
    }

    total as f64
}

/// Assemble the full cost estimate from the accumulated run data
///
/// The hotel component multiplies the cheapest nightly rate by the number of
/// generated plan days, falling back to the trip duration when generation
/// produced no plan.
pub fn estimate(
    hotels: &[HotelOption],
    flights: &[FlightOption],
    attractions: &[Attraction],
    daily_plans: &[DayPlan],
    duration_days: u32,
) -> CostBreakdown {
    let day_count = if daily_plans.is_empty() {
        duration_days as usize
    } else {
        daily_plans.len()
    };

    let hotel_cost = hotels.first().map(|h| h.price_per_night * day_count as f64).unwrap_or(0.0);
    let flight_cost = flights.first().map(|f| f.price).unwrap_or(0.0);
    let attraction_cost = attractions.iter().map(|a| a.cost.unwrap_or(0.0)).sum();
    let activity_meal_cost = activity_meal_cost(daily_plans);

    let breakdown = CostBreakdown {
        hotel_cost,
        flight_cost,
        attraction_cost,
        activity_meal_cost,
    };
    debug!(?breakdown, total = breakdown.total(), "estimate: computed");
    breakdown
}
