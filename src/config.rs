//! Application configuration
//!
//! Loaded from TOML (feature `cli`): an explicit path, else
//! `~/.rate-chart/config.toml`, else built-in defaults. The
//! `RATE_CHART_API_URL` environment variable overrides the source URL.

use crate::chart::ChartStyle;
use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(feature = "cli")]
use crate::error::Result;
#[cfg(feature = "cli")]
use std::{fs, path::Path};

/// Environment variable overriding `source.url`
pub const API_URL_ENV: &str = "RATE_CHART_API_URL";

/// Directory under the home directory holding `config.toml`
pub const CONFIG_DIR: &str = ".rate-chart";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency selected on start-up
    pub default_currency: Currency,
    pub source: SourceConfig,
    pub style: ChartStyle,
}

/// Where records are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Rate API endpoint; takes precedence over `path`
    pub url: Option<String>,
    /// JSON or CSV file
    pub path: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        self.apply_api_url(std::env::var(API_URL_ENV).ok());
    }

    fn apply_api_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using record source URL from {}", API_URL_ENV);
            self.source.url = Some(url);
        }
    }

    /// Parse configuration from TOML text
    #[cfg(feature = "cli")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file
    #[cfg(feature = "cli")]
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Default config file location
    #[cfg(feature = "cli")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join("config.toml"))
    }

    /// Load configuration and apply environment overrides
    ///
    /// An explicit `path` must exist and parse. A broken file at the
    /// default location is logged and ignored.
    #[cfg(feature = "cli")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::from_default_location(),
        };
        config.apply_env();
        Ok(config)
    }

    #[cfg(feature = "cli")]
    fn from_default_location() -> Self {
        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
