//! Rejection-sampler configuration.
//!
//! This module provides the configuration type and builder for
//! [`RejectionSampler`](super::RejectionSampler) runs.

use super::error::ConfigError;
use crate::rng::DEFAULT_SEED;

/// Maximum number of accepted samples a single run may target.
pub const MAX_SAMPLES: u64 = 1_000_000_000;

/// Default trial budget per requested success.
///
/// The cosine solid accepts roughly half of all proposals, so this leaves
/// a wide margin while still turning a region pair that never accepts into
/// a reported error.
pub const DEFAULT_TRIALS_PER_SUCCESS: u64 = 1_000;

/// Rejection-sampler configuration.
///
/// Immutable configuration specifying the generator seed and the trial
/// guard. Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use cosim_core::mc::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .max_trials_per_success(100)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), 42);
/// assert_eq!(config.max_trials_per_success(), Some(100));
/// assert_eq!(config.trial_limit(1_000), Some(100_000));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Generator seed.
    seed: u64,
    /// Trial budget per requested success; `None` disables the guard.
    max_trials_per_success: Option<u64>,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the trial budget per requested success.
    #[inline]
    pub fn max_trials_per_success(&self) -> Option<u64> {
        self.max_trials_per_success
    }

    /// Returns the trial ceiling for a run targeting `target_successes`.
    ///
    /// The product saturates at `u64::MAX`.
    #[inline]
    pub fn trial_limit(&self, target_successes: u64) -> Option<u64> {
        self.max_trials_per_success
            .map(|factor| factor.saturating_mul(target_successes))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the trial budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_trials_per_success == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_trials_per_success",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_trials_per_success: Some(DEFAULT_TRIALS_PER_SUCCESS),
        }
    }
}

/// Builder for [`SamplerConfig`].
///
/// Unset fields fall back to [`DEFAULT_SEED`] and
/// [`DEFAULT_TRIALS_PER_SUCCESS`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    seed: Option<u64>,
    max_trials_per_success: Option<Option<u64>>,
}

impl SamplerConfigBuilder {
    /// Sets the generator seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the trial budget per requested success.
    #[inline]
    pub fn max_trials_per_success(mut self, factor: u64) -> Self {
        self.max_trials_per_success = Some(Some(factor));
        self
    }

    /// Disables the trial guard; runs loop until the target is reached.
    #[inline]
    pub fn unbounded(mut self) -> Self {
        self.max_trials_per_success = Some(None);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the trial budget is zero.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let config = SamplerConfig {
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            max_trials_per_success: self
                .max_trials_per_success
                .unwrap_or(Some(DEFAULT_TRIALS_PER_SUCCESS)),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Validates a requested success count.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSampleCount`] for zero or counts above
/// [`MAX_SAMPLES`].
pub fn validate_sample_count(samples: u64) -> Result<(), ConfigError> {
    if samples == 0 || samples > MAX_SAMPLES {
        return Err(ConfigError::InvalidSampleCount(samples));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SamplerConfig::builder().build().unwrap();

        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(
            config.max_trials_per_success(),
            Some(DEFAULT_TRIALS_PER_SUCCESS)
        );
        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SamplerConfig::builder().seed(42).build().unwrap();
        assert_eq!(config.seed(), 42);
    }

    #[test]
    fn test_config_unbounded() {
        let config = SamplerConfig::builder().unbounded().build().unwrap();

        assert_eq!(config.max_trials_per_success(), None);
        assert_eq!(config.trial_limit(1_000), None);
    }

    #[test]
    fn test_trial_limit_saturates() {
        let config = SamplerConfig::builder()
            .max_trials_per_success(u64::MAX / 2)
            .build()
            .unwrap();

        assert_eq!(config.trial_limit(10), Some(u64::MAX));
    }

    #[test]
    fn test_config_zero_budget_rejected() {
        let result = SamplerConfig::builder().max_trials_per_success(0).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "max_trials_per_success",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_sample_count() {
        assert!(validate_sample_count(1).is_ok());
        assert!(validate_sample_count(MAX_SAMPLES).is_ok());
        assert!(matches!(
            validate_sample_count(0),
            Err(ConfigError::InvalidSampleCount(0))
        ));
        assert!(matches!(
            validate_sample_count(MAX_SAMPLES + 1),
            Err(ConfigError::InvalidSampleCount(_))
        ));
    }
}
