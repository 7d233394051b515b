//! Geocode-then-forecast lookup, independent of any output surface.

use tracing::debug;

use crate::{LookupError, WeatherService, model::DisplayRecord};

/// Step of a lookup currently waiting on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocoding,
    Forecasting,
}

impl Stage {
    pub fn status_message(self) -> &'static str {
        match self {
            Stage::Geocoding => "looking up city…",
            Stage::Forecasting => "fetching weather…",
        }
    }
}

/// Resolve `query` and fetch its current weather.
///
/// `on_stage` is called before each request. The forecast request is only
/// issued once geocoding produced coordinates; nothing is retried.
pub async fn lookup<S, F>(service: &S, query: &str, mut on_stage: F) -> Result<DisplayRecord, LookupError>
where
    S: WeatherService + ?Sized,
    F: FnMut(Stage),
{
    on_stage(Stage::Geocoding);
    debug!(query, "geocoding");
    let geo = service.geocode(query).await?.ok_or(LookupError::NotFound)?;

    on_stage(Stage::Forecasting);
    debug!(name = %geo.name, lat = geo.latitude, lon = geo.longitude, "fetching current weather");
    let weather = service.current_weather(geo.coordinates()).await?;

    Ok(DisplayRecord::new(&geo, &weather))
}
