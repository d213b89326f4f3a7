//! Canned provider implementations for tests

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{
    AttractionProvider, FlightProvider, FlightQuery, HotelProvider, HotelQuery, ProviderError,
    WeatherProvider,
};
use crate::domain::{
    Attraction, FlightOption, HotelOption, TravelType, TripRequest, WeatherCondition,
    WeatherSnapshot,
};

/// A five-day New York → Paris request with the given budget
pub fn test_request(budget: f64) -> TripRequest {
    TripRequest {
        origin: "New York".to_string(),
        destination: "Paris".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
        duration_days: 5,
        budget,
        currency: "USD".to_string(),
        travel_type: TravelType::Sightseeing,
        num_travelers: 1,
        preferences: vec![],
    }
}

pub fn test_flight(airline: &str, price: f64) -> FlightOption {
    FlightOption {
        airline: airline.to_string(),
        departure_time: "2026-09-01 08:00".to_string(),
        arrival_time: "2026-09-01 21:45".to_string(),
        duration: "465 min".to_string(),
        price,
        stops: 0,
        booking_url: None,
    }
}

pub fn test_hotel(name: &str, price_per_night: f64) -> HotelOption {
    HotelOption {
        name: name.to_string(),
        location: "City center".to_string(),
        price_per_night,
        rating: Some(4.2),
        amenities: vec!["wifi".to_string()],
        url: None,
        distance_from_center: None,
    }
}

pub fn test_attraction(name: &str, cost: Option<f64>) -> Attraction {
    Attraction {
        name: name.to_string(),
        description: "Worth a visit".to_string(),
        category: "Landmark".to_string(),
        rating: Some(4.5),
        estimated_time: None,
        cost,
    }
}

/// Weather provider returning one snapshot, or always failing
pub struct StaticWeather {
    snapshot: Option<WeatherSnapshot>,
}

impl StaticWeather {
    pub fn favorable(city: &str) -> Self {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        Self {
            snapshot: Some(WeatherSnapshot::assess(city, date, 22.0, WeatherCondition::Clear, 50, 3.0, 5.0)),
        }
    }

    pub fn cold(city: &str) -> Self {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        Self {
            snapshot: Some(WeatherSnapshot::assess(city, date, 8.0, WeatherCondition::Clouds, 60, 4.0, 5.0)),
        }
    }

    pub fn failing() -> Self {
        Self { snapshot: None }
    }
}

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn current(&self, _city: &str, _date: NaiveDate) -> Result<WeatherSnapshot, ProviderError> {
        self.snapshot
            .clone()
            .ok_or_else(|| ProviderError::InvalidResponse("weather unavailable".to_string()))
    }
}

/// Flight provider returning a fixed list, or always failing
pub struct StaticFlights {
    flights: Option<Vec<FlightOption>>,
}

impl StaticFlights {
    pub fn new(flights: Vec<FlightOption>) -> Self {
        Self { flights: Some(flights) }
    }

    pub fn failing() -> Self {
        Self { flights: None }
    }
}

#[async_trait]
impl FlightProvider for StaticFlights {
    async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOption>, ProviderError> {
        self.flights
            .clone()
            .ok_or_else(|| ProviderError::InvalidResponse("flight search unavailable".to_string()))
    }
}

/// Hotel provider returning a fixed list, or always failing
pub struct StaticHotels {
    hotels: Option<Vec<HotelOption>>,
}

impl StaticHotels {
    pub fn new(hotels: Vec<HotelOption>) -> Self {
        Self { hotels: Some(hotels) }
    }

    pub fn failing() -> Self {
        Self { hotels: None }
    }
}

#[async_trait]
impl HotelProvider for StaticHotels {
    async fn search(&self, _query: &HotelQuery) -> Result<Vec<HotelOption>, ProviderError> {
        self.hotels
            .clone()
            .ok_or_else(|| ProviderError::InvalidResponse("hotel search unavailable".to_string()))
    }
}

/// Attraction provider returning a fixed list, or always failing
pub struct StaticAttractions {
    attractions: Option<Vec<Attraction>>,
}

impl StaticAttractions {
    pub fn new(attractions: Vec<Attraction>) -> Self {
        Self { attractions: Some(attractions) }
    }

    pub fn failing() -> Self {
        Self { attractions: None }
    }
}

#[async_trait]
impl AttractionProvider for StaticAttractions {
    async fn search(&self, _destination: &str) -> Result<Vec<Attraction>, ProviderError> {
        self.attractions
            .clone()
            .ok_or_else(|| ProviderError::InvalidResponse("attraction search unavailable".to_string()))
    }
}
