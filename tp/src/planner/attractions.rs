//! Attraction search step

use std::sync::Arc;
use tracing::{debug, warn};

use super::StepError;
use crate::providers::AttractionProvider;
use crate::state::{PlanningState, Step};

pub(super) async fn find_attractions(
    provider: &Arc<dyn AttractionProvider>,
    state: &mut PlanningState,
) -> Result<(), StepError> {
    debug!("find_attractions: called");
    let request = state.require_request()?;

    match provider.search(&request.destination).await {
        Ok(attractions) => {
            debug!(count = attractions.len(), "find_attractions: fetched");
            state.push_message(format!("🎯 Found {} attractions", attractions.len()));
            state.attractions = attractions;
            state.current_step = Step::AttractionsFound;
        }
        Err(e) => {
            warn!(error = %e, "find_attractions: adapter failed");
            state.record_error(format!("Attraction search failed: {}", e));
        }
    }

    Ok(())
}
