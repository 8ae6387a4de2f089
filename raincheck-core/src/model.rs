use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: DateTime<Utc>,
    pub temp_c: f64,
    /// Percent, 0..=100.
    pub chance_of_rain: f64,
    pub condition: String,
}

impl HourlyForecast {
    pub fn is_rainy(&self, threshold: f64) -> bool {
        self.chance_of_rain >= threshold
    }
}

/// Current conditions plus the hourly forecast for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: Location,
    pub current: CurrentConditions,
    pub hours: Vec<HourlyForecast>,
}

impl Forecast {
    /// Hours not yet in the past, in forecast order.
    pub fn upcoming_hours(&self, now: DateTime<Utc>) -> impl Iterator<Item = &HourlyForecast> {
        self.hours.iter().filter(move |h| h.time >= now)
    }
}
