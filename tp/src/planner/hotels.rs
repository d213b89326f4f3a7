//! Hotel search step
//!
//! Queries the hotel adapter with the per-night ceiling derived from the
//! budget policy and retains the cheapest options. Reports the full match
//! count before truncation.

use std::sync::Arc;
use tracing::{debug, warn};

use super::StepError;
use crate::config::BudgetPolicy;
use crate::providers::{HotelProvider, HotelQuery};
use crate::state::{PlanningState, Step};

/// Hotels kept on state after price sorting
const MAX_HOTELS_RETAINED: usize = 5;

pub(super) async fn search_hotels(
    provider: &Arc<dyn HotelProvider>,
    policy: &BudgetPolicy,
    state: &mut PlanningState,
) -> Result<(), StepError> {
    debug!("search_hotels: called");
    let request = state.require_request()?;

    let query = HotelQuery {
        destination: request.destination.clone(),
        check_in: request.start_date,
        check_out: request.end_date,
        adults: request.num_travelers,
        currency: request.currency.clone(),
        budget_per_night: policy.per_night_ceiling(request.budget),
    };

    match provider.search(&query).await {
        Ok(hotels) => {
            debug!(count = hotels.len(), "search_hotels: fetched");
            state.push_message(format!("🏨 Found {} hotels within budget", hotels.len()));
            state.hotels = hotels.into_iter().take(MAX_HOTELS_RETAINED).collect();
            state.current_step = Step::HotelsFound;
        }
        Err(e) => {
            warn!(error = %e, "search_hotels: adapter failed");
            state.record_error(format!("Hotel search failed: {}", e));
            state.push_message("❌ Hotel search encountered issues");
        }
    }

    Ok(())
}
