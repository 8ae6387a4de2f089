use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

use crate::{credentials::ApiKeyStore, provider::ProviderOptions};

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "RAINCHECK_CONFIG";

pub const DEFAULT_CITY: &str = "Cracow";
pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_RAIN_THRESHOLD: f64 = 40.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings stored on disk. Every field is optional in the file.
///
/// Example TOML:
/// default_city = "Warsaw"
/// rain_threshold = 50
/// api_key_path = "/home/me/.weather-key"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City used when none is given on the command line.
    pub default_city: String,

    /// Base URL of the weatherapi.com v1 API.
    pub base_url: String,

    /// Hours with at least this chance of rain (percent) are highlighted.
    pub rain_threshold: f64,

    pub timeout_secs: u64,

    /// Overrides `<home>/weatherCLI/apikey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rain_threshold: DEFAULT_RAIN_THRESHOLD,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key_path: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file; `RAINCHECK_CONFIG` wins over the platform default.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "raincheck", "raincheck")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn api_key_store(&self) -> Result<ApiKeyStore> {
        match &self.api_key_path {
            Some(path) => Ok(ApiKeyStore::new(path)),
            None => ApiKeyStore::default_location(),
        }
    }

    pub fn provider_options(&self) -> ProviderOptions {
        ProviderOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// City from the command line, falling back to `default_city`.
    pub fn city_or_default(&self, city: Option<String>) -> String {
        city.filter(|c| !c.trim().is_empty()).unwrap_or_else(|| self.default_city.clone())
    }
}
