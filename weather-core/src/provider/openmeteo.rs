use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::{Client, Request, Url};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::{
    Config, LookupError,
    codes::WeatherCode,
    model::{Coordinates, CurrentWeather, GeoResult},
};

use super::WeatherService;

/// Fields requested from the forecast endpoint's `current` block.
const CURRENT_FIELDS: &str = "temperature_2m,wind_speed_10m,weather_code";

/// Client for the Open-Meteo geocoding and forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    geocoding_url: Url,
    forecast_url: Url,
}

impl OpenMeteoClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().context("Failed to build HTTP client")?,
            geocoding_url: Url::parse(&config.geocoding_url)
                .with_context(|| format!("Invalid geocoding_url: '{}'", config.geocoding_url))?,
            forecast_url: Url::parse(&config.forecast_url)
                .with_context(|| format!("Invalid forecast_url: '{}'", config.forecast_url))?,
        })
    }

    fn geocode_request(&self, query: &str) -> Result<Request, LookupError> {
        Ok(self
            .http
            .get(self.geocoding_url.clone())
            .query(&[("name", query), ("count", "1")])
            .build()?)
    }

    fn forecast_request(&self, at: Coordinates) -> Result<Request, LookupError> {
        Ok(self
            .http
            .get(self.forecast_url.clone())
            .query(&[
                ("latitude", at.latitude.to_string()),
                ("longitude", at.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .build()?)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, LookupError> {
        let url = request.url().clone();
        debug!(%url, "sending request");

        let res = self.http.execute(request).await?;
        let status = res.status();

        if !status.is_success() {
            debug!(%url, %status, "request failed");
            return Err(LookupError::service(status));
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherService for OpenMeteoClient {
    async fn geocode(&self, query: &str) -> Result<Option<GeoResult>, LookupError> {
        let request = self.geocode_request(query)?;
        let parsed: GeocodingResponse = self.fetch_json(request).await?;
        Ok(parsed.first())
    }

    async fn current_weather(&self, at: Coordinates) -> Result<CurrentWeather, LookupError> {
        let request = self.forecast_request(at)?;
        let parsed: ForecastResponse = self.fetch_json(request).await?;
        Ok(parsed.current.into())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingEntry>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingEntry {
    name: String,
    #[serde(default)]
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl GeocodingResponse {
    fn first(self) -> Option<GeoResult> {
        let entry = self.results?.into_iter().next()?;
        Some(GeoResult {
            name: entry.name,
            country: entry.country.unwrap_or_default(),
            latitude: entry.latitude,
            longitude: entry.longitude,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    #[serde(default, deserialize_with = "observation_time")]
    time: Option<NaiveDateTime>,
    temperature_2m: f64,
    wind_speed_10m: f64,
    weather_code: i64,
}

impl From<CurrentBlock> for CurrentWeather {
    fn from(block: CurrentBlock) -> Self {
        Self {
            temperature: block.temperature_2m,
            wind_speed: block.wind_speed_10m,
            weather_code: WeatherCode(block.weather_code),
            observed_at: block.time,
        }
    }
}

/// Open-Meteo reports `2024-05-01T14:15`; an unreadable time is dropped, not fatal.
/// That includes non-string values such as `timeformat=unixtime` integers.
fn observation_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(|s| {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }))
}
