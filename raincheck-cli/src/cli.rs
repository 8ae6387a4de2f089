use chrono::{Local, Utc};
use clap::{ArgAction, Parser};
use raincheck_core::{Config, WeatherApiProvider, WeatherProvider, WeatherRequest};
use tracing::debug;

use crate::{prompt, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "raincheck",
    version,
    about = "Current weather and the rest of today's hourly forecast"
)]
pub struct Cli {
    /// City to look up. Defaults to `default_city` from the config file ("Cracow").
    pub city: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Ask for a new API key and overwrite the stored one.
    #[arg(long)]
    pub reset_key: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = config.api_key_store()?;
        debug!(path = %store.path().display(), "using API key file");

        let api_key = if self.reset_key {
            store.replace(prompt::ask_api_key)?
        } else {
            store.resolve(prompt::ask_api_key)?
        };

        let city = config.city_or_default(self.city);
        let provider = WeatherApiProvider::new(api_key, config.provider_options())?;

        let forecast = provider.get_forecast(&WeatherRequest::new(city)).await.map_err(|err| {
            let context = if err.is_invalid_api_key() {
                "error while fetching weather\n\
                 Hint: run `raincheck --reset-key` and enter a valid key."
            } else {
                "error while fetching weather"
            };
            anyhow::Error::new(err).context(context)
        })?;

        let lines = render::report_lines(&forecast, Utc::now(), &Local, config.rain_threshold);
        render::print_lines(&lines);

        Ok(())
    }
}
