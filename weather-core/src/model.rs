use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::codes::WeatherCode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// First match of a geocoding search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoResult {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { latitude: self.latitude, longitude: self.longitude }
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Current conditions at a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: WeatherCode,
    /// Provider's observation time, local to the location.
    pub observed_at: Option<NaiveDateTime>,
}

/// Render-ready summary of one successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub location_label: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub condition_label: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<NaiveDateTime>,
}

impl DisplayRecord {
    /// Only a resolved location paired with its weather can become a record.
    pub fn new(geo: &GeoResult, weather: &CurrentWeather) -> Self {
        Self {
            location_label: geo.label(),
            temperature: weather.temperature,
            wind_speed: weather.wind_speed,
            condition_label: weather.weather_code.condition_label(),
            coordinates: geo.coordinates(),
            observed_at: weather.observed_at,
        }
    }
}
