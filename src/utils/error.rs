//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a match export
///
/// A failed load never replaces the dataset that is already active.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Not a CSV file: {0}")]
    NotCsv(String),

    #[error("CSV has no header row")]
    MissingHeader,

    #[error("CSV contains no match rows")]
    NoRows,
}

/// Errors that can occur while loading histogram overrides
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid histogram override for '{metric}': {reason}")]
    InvalidOverride { metric: String, reason: String },

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
