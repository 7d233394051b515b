use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

use crate::{
    Config, LookupError,
    model::{Coordinates, CurrentWeather, GeoResult},
};

pub mod openmeteo;

pub use openmeteo::OpenMeteoClient;

/// The two remote calls a lookup needs.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    /// First location matching `query`, or `None` when nothing matched.
    async fn geocode(&self, query: &str) -> Result<Option<GeoResult>, LookupError>;

    async fn current_weather(&self, at: Coordinates) -> Result<CurrentWeather, LookupError>;
}

#[async_trait]
impl<T: WeatherService + ?Sized> WeatherService for Arc<T> {
    async fn geocode(&self, query: &str) -> Result<Option<GeoResult>, LookupError> {
        (**self).geocode(query).await
    }

    async fn current_weather(&self, at: Coordinates) -> Result<CurrentWeather, LookupError> {
        (**self).current_weather(at).await
    }
}

#[async_trait]
impl<T: WeatherService + ?Sized> WeatherService for Box<T> {
    async fn geocode(&self, query: &str) -> Result<Option<GeoResult>, LookupError> {
        (**self).geocode(query).await
    }

    async fn current_weather(&self, at: Coordinates) -> Result<CurrentWeather, LookupError> {
        (**self).current_weather(at).await
    }
}

/// Construct the service described by `config`.
pub fn service_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherService>> {
    config.validate()?;
    Ok(Box::new(OpenMeteoClient::from_config(config)?))
}
