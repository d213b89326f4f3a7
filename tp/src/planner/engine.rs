//! Step-graph engine
//!
//! Fixed topology: weather → gate → flights → gate → hotels → attractions →
//! itinerary, with both gates able to divert into the alternatives branch.
//! The engine owns one mutable PlanningState per run and emits a snapshot
//! clone after every step; a dropped snapshot receiver cancels the run at
//! the next emission point.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::decision::{self, FlightDecision, WeatherDecision};
use super::{alternatives, attractions, flights, hotels, itinerary, weather};
use crate::config::BudgetPolicy;
use crate::domain::TripRequest;
use crate::llm::TextGenerator;
use crate::providers::{AttractionProvider, FlightProvider, HotelProvider, WeatherProvider};
use crate::state::{AlternativeReason, PlanningState, Step};

/// Unrecoverable step failure; everything else lands in the state logs
#[derive(Debug, Error)]
pub enum StepError {
    #[error("Trip request is missing")]
    MissingTripRequest,
}

/// The workflow engine, generic over its collaborators
pub struct Planner {
    weather: Arc<dyn WeatherProvider>,
    flights: Arc<dyn FlightProvider>,
    hotels: Arc<dyn HotelProvider>,
    attractions: Arc<dyn AttractionProvider>,
    llm: Arc<dyn TextGenerator>,
    policy: BudgetPolicy,
}

impl Planner {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        flights: Arc<dyn FlightProvider>,
        hotels: Arc<dyn HotelProvider>,
        attractions: Arc<dyn AttractionProvider>,
        llm: Arc<dyn TextGenerator>,
        policy: BudgetPolicy,
    ) -> Self {
        debug!("Planner::new: called");
        Self {
            weather,
            flights,
            hotels,
            attractions,
            llm,
            policy,
        }
    }

    /// Run the full workflow and return the final state
    pub async fn run(&self, request: TripRequest) -> PlanningState {
        self.drive(request, None).await
    }

    /// Run the workflow, emitting a state snapshot after every step
    ///
    /// Dropping the receiver cancels the run; the state as of the last
    /// completed step is still returned.
    pub async fn run_stepwise(
        &self,
        request: TripRequest,
        snapshots: mpsc::Sender<PlanningState>,
    ) -> PlanningState {
        self.drive(request, Some(&snapshots)).await
    }

    /// Emit a snapshot; false means the receiver is gone
    async fn emit(tx: Option<&mpsc::Sender<PlanningState>>, state: &PlanningState) -> bool {
        match tx {
            Some(tx) => tx.send(state.clone()).await.is_ok(),
            None => true,
        }
    }

    async fn divert_to_alternatives(
        &self,
        state: &mut PlanningState,
        label: Step,
        reason: AlternativeReason,
        expensive_price: Option<f64>,
    ) {
        info!(%label, %reason, "Planner::divert_to_alternatives: called");
        state.current_step = label;
        state.alternative_reason = Some(reason);
        state.expensive_flight_price = expensive_price;
        if let Err(e) = alternatives::suggest_alternatives(&self.llm, state).await {
            warn!(error = %e, "Planner::divert_to_alternatives: step failed");
            state.record_error(format!("Alternative suggestion failed: {}", e));
            state.current_step = Step::AlternativesSuggested;
        }
    }

    async fn drive(&self, request: TripRequest, tx: Option<&mpsc::Sender<PlanningState>>) -> PlanningState {
        info!(origin = %request.origin, destination = %request.destination, "Planner::drive: called");
        let mut state = PlanningState::new(request);

        if let Err(e) = weather::check_weather(&self.weather, &mut state).await {
            state.record_error(format!("Weather step failed: {}", e));
            return state;
        }
        if !Self::emit(tx, &state).await {
            debug!("Planner::drive: snapshot receiver dropped, cancelling");
            return state;
        }

        if decision::weather_decision(&state) == WeatherDecision::SuggestAlternatives {
            self.divert_to_alternatives(
                &mut state,
                Step::WeatherUnfavorable,
                AlternativeReason::UnfavorableWeather,
                None,
            )
            .await;
            Self::emit(tx, &state).await;
            return state;
        }

        if let Err(e) = flights::search_flights(&self.flights, &self.llm, &self.policy, &mut state).await {
            state.record_error(format!("Flight step failed: {}", e));
            state.push_message("❌ Flight search failed. Cannot proceed with itinerary.");
            return state;
        }
        if !Self::emit(tx, &state).await {
            debug!("Planner::drive: snapshot receiver dropped, cancelling");
            return state;
        }

        if let FlightDecision::SuggestAlternatives { reason, expensive_price } =
            decision::flight_budget_decision(&state, &self.policy)
        {
            self.divert_to_alternatives(&mut state, Step::FlightsIssue, reason, expensive_price).await;
            Self::emit(tx, &state).await;
            return state;
        }

        if let Err(e) = hotels::search_hotels(&self.hotels, &self.policy, &mut state).await {
            state.record_error(format!("Hotel step failed: {}", e));
            return state;
        }
        if !Self::emit(tx, &state).await {
            debug!("Planner::drive: snapshot receiver dropped, cancelling");
            return state;
        }

        if let Err(e) = attractions::find_attractions(&self.attractions, &mut state).await {
            state.record_error(format!("Attraction step failed: {}", e));
            return state;
        }
        if !Self::emit(tx, &state).await {
            debug!("Planner::drive: snapshot receiver dropped, cancelling");
            return state;
        }

        if let Err(e) = itinerary::create_itinerary(&self.llm, &mut state).await {
            state.record_error(format!("Itinerary step failed: {}", e));
            return state;
        }
        Self::emit(tx, &state).await;

        info!(step = %state.current_step, errors = state.errors.len(), "Planner::drive: finished");
        state
    }
}
