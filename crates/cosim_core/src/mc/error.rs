//! Error types for the rejection-sampling integrator.
//!
//! Configuration errors are raised while validating inputs; sampling errors
//! are raised by a run itself.

use thiserror::Error;

/// Configuration error for the integrator.
///
/// These errors occur before any sample is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Sample count outside the valid range [1, 1_000_000_000].
    #[error("Invalid sample count {0}: must be in range [1, 1_000_000_000]")]
    InvalidSampleCount(u64),

    /// Sweep bounds with a zero component.
    #[error("Invalid sweep (min={min}, max={max}, step={step}): all values must be positive")]
    InvalidSweep {
        /// Smallest sample count.
        min: u64,
        /// Exclusive upper bound.
        max: u64,
        /// Increment between counts.
        step: u64,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Error raised while running the accept/reject loop or deriving results.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// Invalid input detected before sampling.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trial ceiling was reached before the target success count.
    #[error("Trial limit {limit} reached after {successes} successes")]
    TrialLimitExceeded {
        /// Trials attempted.
        limit: u64,
        /// Successes accumulated when the limit was reached.
        successes: u64,
    },

    /// An estimate was requested from a tally with no trials.
    #[error("Cannot estimate a volume from zero trials")]
    EmptyTally,

    /// The target region carries no closed-form volume to compare against.
    #[error("Target region has no reference volume")]
    MissingReferenceVolume,
}

/// Result alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = ConfigError::InvalidSweep {
            min: 0,
            max: 10,
            step: 1,
        };
        assert!(err.to_string().contains("min=0"));

        let err = ConfigError::InvalidParameter {
            name: "max_trials_per_success",
            value: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("max_trials_per_success"));
    }

    #[test]
    fn test_sampling_error_display() {
        let err = SamplingError::TrialLimitExceeded {
            limit: 500,
            successes: 3,
        };
        assert_eq!(err.to_string(), "Trial limit 500 reached after 3 successes");

        let err: SamplingError = ConfigError::InvalidSampleCount(0).into();
        assert!(err.to_string().contains("Invalid sample count 0"));
    }
}
