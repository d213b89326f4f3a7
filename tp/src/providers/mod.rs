//! External provider adapters
//!
//! One trait per external collaborator, plus the concrete HTTP clients. The
//! workflow core only ever sees the traits; each adapter call is a single
//! blocking request/response with the timeout supplied by the client and no
//! retry.

use async_trait::async_trait;
use chrono::NaiveDate;

mod airport;
mod attractions;
mod error;
mod flights;
mod hotels;
#[cfg(test)]
pub mod mock;
mod weather;

pub use airport::resolve_airport_code;
pub use attractions::SerpApiAttractionClient;
pub use error::ProviderError;
pub use flights::{FlightQuery, SerpApiFlightClient};
pub use hotels::{HotelQuery, SerpApiHotelClient};
pub use weather::OpenWeatherClient;

use crate::domain::{Attraction, FlightOption, HotelOption, WeatherSnapshot};

/// Weather lookup for a city on a given date
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str, date: NaiveDate) -> Result<WeatherSnapshot, ProviderError>;
}

/// Flight lookup for a route and dates
///
/// Returns options sorted ascending by price; may legitimately be empty.
/// Implementations pre-filter at the flight sub-budget ceiling, but callers
/// must not rely on that filtering having happened.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOption>, ProviderError>;
}

/// Hotel lookup for a destination and date range
///
/// Returns options sorted ascending by price per night.
#[async_trait]
pub trait HotelProvider: Send + Sync {
    async fn search(&self, query: &HotelQuery) -> Result<Vec<HotelOption>, ProviderError>;
}

/// Attraction lookup for a destination
#[async_trait]
pub trait AttractionProvider: Send + Sync {
    async fn search(&self, destination: &str) -> Result<Vec<Attraction>, ProviderError>;
}
