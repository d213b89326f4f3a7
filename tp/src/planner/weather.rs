//! Weather check step
//!
//! First step of every run. Fetches a snapshot for the destination on the
//! start date; an adapter failure is logged and leaves the snapshot absent,
//! which the weather gate then treats as unfavorable.

use std::sync::Arc;
use tracing::{debug, warn};

use super::StepError;
use crate::providers::WeatherProvider;
use crate::state::{PlanningState, Step};

pub(super) async fn check_weather(
    provider: &Arc<dyn WeatherProvider>,
    state: &mut PlanningState,
) -> Result<(), StepError> {
    debug!("check_weather: called");
    let request = state.require_request()?;

    match provider.current(&request.destination, request.start_date).await {
        Ok(weather) => {
            debug!(temperature = weather.temperature, condition = %weather.condition, "check_weather: fetched");
            if weather.is_favorable {
                state.push_message(format!(
                    "✅ Weather looks good in {}! Temp: {}°C",
                    request.destination, weather.temperature
                ));
            } else {
                let alert = weather.alert.as_deref().unwrap_or("unfavorable conditions");
                state.push_message(format!("⚠️ Weather alert for {}: {}", request.destination, alert));
                state.should_replan = true;
            }
            state.weather_data = Some(weather);
            state.current_step = Step::WeatherChecked;
        }
        Err(e) => {
            warn!(error = %e, "check_weather: adapter failed");
            state.record_error(format!("Weather check failed: {}", e));
            state.push_message("❌ Could not fetch weather data. Proceeding with caution.");
        }
    }

    Ok(())
}
