//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use cosim_core::mc::{SamplerConfig, SweepRange, DEFAULT_TRIALS_PER_SUCCESS};
use cosim_core::rng::DEFAULT_SEED;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Run configuration.
///
/// Defaults mirror the classic calculator: 1000 samples, and an error sweep
/// from 100 to 100000 in steps of 1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CosimConfig {
    /// Generator seed
    pub seed: u64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Trial budget per requested success; 0 disables the guard
    pub max_trials_per_success: u64,
    /// Calculator-mode sample count
    pub samples: u64,
    /// Sweep lower bound
    pub min: u64,
    /// Sweep exclusive upper bound
    pub max: u64,
    /// Sweep increment
    pub step: u64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CosimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            log_level: LogLevel::Info,
            max_trials_per_success: DEFAULT_TRIALS_PER_SUCCESS,
            samples: 1000,
            min: 100,
            max: 100_000,
            step: 1,
        }
    }
}

impl CosimConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CosimConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Recognised variables: `COSIM_SEED`, `COSIM_LOG_LEVEL`,
    /// `COSIM_MAX_TRIALS_PER_SUCCESS`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("COSIM_SEED") {
            self.seed = parse_u64("COSIM_SEED", &seed)?;
        }
        if let Some(level) = lookup("COSIM_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(factor) = lookup("COSIM_MAX_TRIALS_PER_SUCCESS") {
            self.max_trials_per_success = parse_u64("COSIM_MAX_TRIALS_PER_SUCCESS", &factor)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(factor) = cli.max_trials_per_success {
            self.max_trials_per_success = factor;
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if let Some(min) = cli.min {
            self.min = min;
        }
        if let Some(max) = cli.max {
            self.max = max;
        }
        if let Some(step) = cli.step {
            self.step = step;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("samples", self.samples),
            ("min", self.min),
            ("max", self.max),
            ("step", self.step),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    value: "must be a positive integer".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Sampler configuration for the core
    pub fn sampler_config(&self) -> Result<SamplerConfig, cosim_core::mc::ConfigError> {
        let builder = SamplerConfig::builder().seed(self.seed);
        let builder = match self.max_trials_per_success {
            0 => builder.unbounded(),
            factor => builder.max_trials_per_success(factor),
        };
        builder.build()
    }

    /// Error-mode sweep range
    pub fn sweep_range(&self) -> Result<SweepRange, cosim_core::mc::ConfigError> {
        SweepRange::new(self.min, self.max, self.step)
    }
}

fn parse_u64(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Trial budget override
    pub max_trials_per_success: Option<u64>,
    /// Calculator-mode sample count override
    pub samples: Option<u64>,
    /// Sweep lower bound override
    pub min: Option<u64>,
    /// Sweep upper bound override
    pub max: Option<u64>,
    /// Sweep increment override
    pub step: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CosimConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CosimConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CosimConfig::from_file(path)?,
        None => CosimConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
