use crate::{Forecast, WeatherRequest, error::WeatherError};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Connection settings for a provider.
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions and today's hourly forecast for `request.city`.
    async fn get_forecast(&self, request: &WeatherRequest) -> Result<Forecast, WeatherError>;
}
