use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{CurrentConditions, Forecast, HourlyForecast, Location, WeatherRequest},
};

use super::{ProviderOptions, WeatherProvider};

const FORECAST_DAYS: &str = "1";
const AQI: &str = "no";
const ALERTS: &str = "no";

/// Client for the weatherapi.com `forecast.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, options: ProviderOptions) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(options.timeout).build()?;
        let base_url = options.base_url.trim_end_matches('/').to_string();

        Ok(Self { api_key, base_url, http })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn get_forecast(&self, request: &WeatherRequest) -> Result<Forecast, WeatherError> {
        let url = self.forecast_url();
        debug!(%url, city = %request.city, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.city.as_str()),
                ("days", FORECAST_DAYS),
                ("aqi", AQI),
                ("alerts", ALERTS),
            ])
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::FORBIDDEN {
            warn!("weatherapi rejected the API key");
            return Err(WeatherError::InvalidApiKey);
        }

        let body = res.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "weatherapi request failed");
            return Err(WeatherError::UnexpectedStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: WaForecastResponse = serde_json::from_str(&body)?;
        parsed.into_forecast()
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    #[serde(with = "chrono::serde::ts_seconds")]
    time_epoch: DateTime<Utc>,
    temp_c: f64,
    chance_of_rain: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

impl WaForecastResponse {
    fn into_forecast(self) -> Result<Forecast, WeatherError> {
        let day =
            self.forecast.forecastday.into_iter().next().ok_or(WeatherError::MissingForecastDay)?;

        let hours = day
            .hour
            .into_iter()
            .map(|h| HourlyForecast {
                time: h.time_epoch,
                temp_c: h.temp_c,
                chance_of_rain: h.chance_of_rain,
                condition: h.condition.text,
            })
            .collect();

        Ok(Forecast {
            location: Location { name: self.location.name, country: self.location.country },
            current: CurrentConditions {
                temp_c: self.current.temp_c,
                condition: self.current.condition.text,
            },
            hours,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
