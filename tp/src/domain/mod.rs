//! Domain types for trip planning
//!
//! Immutable value objects threaded through the workflow: the user's request,
//! provider search results, and the assembled itinerary.

mod itinerary;
mod request;
mod travel;
mod weather;

pub use itinerary::{Activity, DayPlan, Meal, MealType, TripItinerary};
pub use request::{RequestError, TravelType, TripRequest};
pub use travel::{Attraction, FlightOption, HotelOption, sort_flights_by_price, sort_hotels_by_price};
pub use weather::{WeatherCondition, WeatherSnapshot};
