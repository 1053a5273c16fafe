//! Record sources
//!
//! The external collaborators that read the raw observation set:
//! - JSON file: the API payload saved to disk
//! - CSV file: the same columns as a header row
//! - HTTP: the live rate API (feature `async`)

pub mod file;
#[cfg(feature = "async")]
pub mod http;

pub use file::{CsvFileSource, JsonFileSource};
#[cfg(feature = "async")]
pub use http::HttpRecordSource;

use crate::config::SourceConfig;
use crate::data::ingest::IngestReport;
use crate::error::{RateChartError, Result};
use std::future::Future;
use std::path::Path;

/// Trait for record sources
pub trait RecordSource: Send + Sync {
    /// Read the full record set once
    fn fetch(&self) -> impl Future<Output = Result<IngestReport>> + Send;

    /// Get the source name
    fn name(&self) -> &str;
}

/// Source selected from configuration
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Json(JsonFileSource),
    Csv(CsvFileSource),
    #[cfg(feature = "async")]
    Http(HttpRecordSource),
}

impl ConfiguredSource {
    /// Pick the source named by `config`
    ///
    /// A URL takes precedence over a path. Files ending in `.csv` are read
    /// as CSV, anything else as JSON.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        if let Some(url) = config.url.as_deref() {
            return Self::from_url(url, config.timeout_secs);
        }

        match config.path.as_deref() {
            Some(path) => Ok(Self::from_path(path)),
            None => Err(RateChartError::ConfigError(
                "No record source configured (set a URL or a file path)".to_string(),
            )),
        }
    }

    /// File source chosen by extension
    pub fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            ConfiguredSource::Csv(CsvFileSource::new(path))
        } else {
            ConfiguredSource::Json(JsonFileSource::new(path))
        }
    }

    #[cfg(feature = "async")]
    fn from_url(url: &str, timeout_secs: u64) -> Result<Self> {
        let timeout = std::time::Duration::from_secs(timeout_secs);
        Ok(ConfiguredSource::Http(HttpRecordSource::with_timeout(
            url, timeout,
        )?))
    }

    #[cfg(not(feature = "async"))]
    fn from_url(url: &str, _timeout_secs: u64) -> Result<Self> {
        Err(RateChartError::ConfigError(format!(
            "Fetching from {} requires the `async` feature",
            url
        )))
    }
}

impl RecordSource for ConfiguredSource {
    fn fetch(&self) -> impl Future<Output = Result<IngestReport>> + Send {
        async move {
            match self {
                ConfiguredSource::Json(source) => source.fetch().await,
                ConfiguredSource::Csv(source) => source.fetch().await,
                #[cfg(feature = "async")]
                ConfiguredSource::Http(source) => source.fetch().await,
            }
        }
    }

    fn name(&self) -> &str {
        match self {
            ConfiguredSource::Json(source) => source.name(),
            ConfiguredSource::Csv(source) => source.name(),
            #[cfg(feature = "async")]
            ConfiguredSource::Http(source) => source.name(),
        }
    }
}
