//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Weather-code lookup tables
//! - Configuration of the remote endpoints
//! - Abstraction over the geocoding and forecast service
//! - The geocode-then-forecast pipeline and the submission handler
//! - The `Presenter` seam that output surfaces implement
//!
//! It is used by `cityweather-cli`, but any other front end can drive
//! [`SubmissionHandler`] with its own [`Presenter`].

pub mod codes;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod pipeline;
pub mod presenter;
pub mod provider;

#[cfg(test)]
mod test_support;

pub use codes::WeatherCode;
pub use config::Config;
pub use error::LookupError;
pub use handler::{Submission, SubmissionHandler};
pub use model::{Coordinates, CurrentWeather, DisplayRecord, GeoResult};
pub use presenter::{MemoryPresenter, Presenter, ViewState};
pub use provider::{OpenMeteoClient, WeatherService};
