//! Core library for the `raincheck` CLI.
//!
//! This crate defines:
//! - Configuration and the on-disk API key store
//! - The weatherapi.com forecast client
//! - Shared domain models (requests, forecasts)
//!
//! It is used by `raincheck-cli`, but has no terminal I/O of its own.

pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use credentials::ApiKeyStore;
pub use error::WeatherError;
pub use model::{CurrentConditions, Forecast, HourlyForecast, Location, WeatherRequest};
pub use provider::{ProviderOptions, WeatherApiProvider, WeatherProvider};
