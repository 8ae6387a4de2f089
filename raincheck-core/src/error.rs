use thiserror::Error;

/// Failures talking to the forecast service.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service rejected the API key (HTTP 403).
    #[error("invalid API Key")]
    InvalidApiKey,

    /// Any non-200 status other than 403.
    #[error("Weather API returned status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Transport failure. The request URL is stripped so the key never ends up in messages.
    #[error("failed to fetch weather data")]
    Request(#[source] reqwest::Error),

    /// Malformed body, including hour timestamps outside the representable range.
    #[error("failed to parse JSON response")]
    Parse(#[from] serde_json::Error),

    #[error("Weather API response contained no forecastday data")]
    MissingForecastDay,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Request(err.without_url())
    }
}

impl WeatherError {
    pub fn is_invalid_api_key(&self) -> bool {
        matches!(self, WeatherError::InvalidApiKey)
    }
}
