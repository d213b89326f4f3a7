//! Trip-planning workflow core
//!
//! The engine drives a fixed step graph over PlanningState; each step lives
//! in its own module and talks to external collaborators only through the
//! provider traits. Decisions are pure functions so the routing logic can be
//! tested without any adapters.

mod alternatives;
mod attractions;
pub mod cost;
pub mod decision;
mod engine;
mod flights;
mod hotels;
mod itinerary;
mod weather;

pub use cost::CostBreakdown;
pub use decision::{FlightDecision, WeatherDecision};
pub use engine::{Planner, StepError};
