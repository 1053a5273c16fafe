//! Error types for the rate chart pipeline

use thiserror::Error;

/// Main error type for rusty_ratechart
#[derive(Error, Debug)]
pub enum RateChartError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[cfg(feature = "async")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[cfg(feature = "cli")]
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for rusty_ratechart operations
pub type Result<T> = std::result::Result<T, RateChartError>;
