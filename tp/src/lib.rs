//! tripplan - weather- and budget-gated trip planning workflow
//!
//! tripplan drives a multi-day trip-planning decision workflow: a fixed step
//! graph that checks destination weather, searches flights and hotels within
//! budget-derived ceilings, collects attractions, and generates a day-by-day
//! itinerary. Two gates can divert a run onto the alternative-suggestion
//! branch: unfavorable (or unobtainable) weather, and flights that are
//! missing or consume too large a share of the budget.
//!
//! # Core Concepts
//!
//! - **Append-only logs**: errors and progress messages only ever grow
//! - **One state per run**: every step reads and extends the same aggregate
//! - **Snapshots, not callbacks**: stepwise runs emit state clones over a channel
//! - **Policy in config**: budget thresholds live in one place, shared by
//!   adapter pre-filters and decision gates
//!
//! # Modules
//!
//! - [`domain`] - Request, weather, travel, and itinerary value types
//! - [`state`] - The planning state aggregate and step vocabulary
//! - [`providers`] - Provider traits and HTTP adapters
//! - [`llm`] - Text-generation trait, Gemini client, output extraction
//! - [`planner`] - Step implementations, gates, and the engine
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod providers;
pub mod state;

// Re-export commonly used types
pub use config::{BudgetPolicy, Config, LlmConfig};
pub use domain::{
    Activity, Attraction, DayPlan, FlightOption, HotelOption, Meal, MealType, RequestError, TravelType,
    TripItinerary, TripRequest, WeatherCondition, WeatherSnapshot,
};
pub use llm::{GeminiClient, GenerationRequest, LlmError, TextGenerator};
pub use planner::{CostBreakdown, FlightDecision, Planner, StepError, WeatherDecision};
pub use providers::{
    AttractionProvider, FlightProvider, FlightQuery, HotelProvider, HotelQuery, OpenWeatherClient,
    ProviderError, SerpApiAttractionClient, SerpApiFlightClient, SerpApiHotelClient, WeatherProvider,
};
pub use state::{AlternativeReason, PlanningState, Step};
