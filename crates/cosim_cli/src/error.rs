//! Error types for the Cosim CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Invalid sampler or sweep parameters
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] cosim_core::mc::ConfigError),

    /// Integration failure
    #[error("Sampling error: {0}")]
    Sampling(#[from] cosim_core::SamplingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
