use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use crate::{
    LookupError, WeatherService,
    codes::WeatherCode,
    model::{Coordinates, CurrentWeather, GeoResult},
};

/// In-memory [`WeatherService`] keyed by query and by latitude.
#[derive(Debug, Default)]
pub struct FakeService {
    places: HashMap<String, Result<Option<GeoResult>, LookupError>>,
    forecasts: Vec<(f64, Result<CurrentWeather, LookupError>)>,
    delays: HashMap<String, Duration>,
    geocode_calls: AtomicUsize,
    forecast_calls: AtomicUsize,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(mut self, query: &str, geo: GeoResult, weather: CurrentWeather) -> Self {
        self.forecasts.push((geo.latitude, Ok(weather)));
        self.places.insert(query.to_string(), Ok(Some(geo)));
        self
    }

    pub fn place_with_forecast_error(mut self, query: &str, geo: GeoResult, err: LookupError) -> Self {
        self.forecasts.push((geo.latitude, Err(err)));
        self.places.insert(query.to_string(), Ok(Some(geo)));
        self
    }

    pub fn geocode_error(mut self, query: &str, err: LookupError) -> Self {
        self.places.insert(query.to_string(), Err(err));
        self
    }

    /// Geocoding for `query` resolves only after `delay`.
    pub fn delayed(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn geocode_count(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }

    pub fn forecast_count(&self) -> usize {
        self.forecast_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherService for FakeService {
    async fn geocode(&self, query: &str) -> Result<Option<GeoResult>, LookupError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        self.places.get(query).cloned().unwrap_or(Ok(None))
    }

    async fn current_weather(&self, at: Coordinates) -> Result<CurrentWeather, LookupError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.forecasts
            .iter()
            .find(|(lat, _)| *lat == at.latitude)
            .map(|(_, res)| res.clone())
            .unwrap_or_else(|| Err(LookupError::Service { status: 404, reason: "Not Found".into() }))
    }
}

pub fn geo(name: &str, country: &str, latitude: f64, longitude: f64) -> GeoResult {
    GeoResult { name: name.into(), country: country.into(), latitude, longitude }
}

pub fn weather(temperature: f64, wind_speed: f64, code: i64) -> CurrentWeather {
    CurrentWeather { temperature, wind_speed, weather_code: WeatherCode(code), observed_at: None }
}

pub fn london() -> GeoResult {
    geo("London", "United Kingdom", 51.5, -0.12)
}
