//! Rejection-sampling volume integrator.
//!
//! This module provides [`RejectionSampler`], which estimates the volume of a
//! target region by drawing points uniformly from an enclosing proposal
//! region and counting how many land inside the target.
//!
//! # Estimator
//!
//! ```text
//! estimate = (successes / trials) × proposal_volume
//! error    = |1 − estimate / exact_volume|
//! ```
//!
//! A run draws until a requested number of successes is reached, so the
//! trial count is the random quantity.

use tracing::{debug, warn};

use super::config::{validate_sample_count, SamplerConfig};
use super::error::{Result, SamplingError};
use super::geometry::{CosineSolid, Cylinder, Point3};
use super::region::{ProposalRegion, TargetRegion};
use super::result::{IntegrationResult, Tally};
use super::sweep::{SweepPoint, SweepRange};
use crate::rng::CosimRng;

/// Accept/reject Monte Carlo integrator over a proposal/target pair.
///
/// The sampler owns its generator. Successive runs continue the same stream;
/// it is never reseeded between runs.
///
/// # Examples
///
/// ```rust
/// use cosim_core::mc::{cosine_solid, SamplerConfig};
///
/// let config = SamplerConfig::builder().seed(42).build().unwrap();
/// let mut sampler = cosine_solid(config);
///
/// let tally = sampler.run(500).unwrap();
/// assert_eq!(tally.successes, 500);
///
/// let estimate = sampler.estimate(&tally).unwrap();
/// let error = sampler.relative_error(estimate).unwrap();
/// assert!((0.0..=1.0).contains(&error));
/// ```
#[derive(Clone, Debug)]
pub struct RejectionSampler<P, T> {
    proposal: P,
    target: T,
    rng: CosimRng,
    config: SamplerConfig,
}

impl<P, T> RejectionSampler<P, T>
where
    P: ProposalRegion,
    T: TargetRegion,
{
    /// Creates a sampler whose generator is seeded from `config`.
    pub fn new(proposal: P, target: T, config: SamplerConfig) -> Self {
        let rng = CosimRng::new(config.seed());
        Self::with_rng(proposal, target, config, rng)
    }

    /// Creates a sampler that draws from an existing generator.
    ///
    /// The configured seed is ignored in favour of `rng`'s current state.
    pub fn with_rng(proposal: P, target: T, config: SamplerConfig, rng: CosimRng) -> Self {
        Self {
            proposal,
            target,
            rng,
            config,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Returns the generator in its current state.
    #[inline]
    pub fn rng(&self) -> &CosimRng {
        &self.rng
    }

    /// Consumes the sampler, returning its generator.
    pub fn into_rng(self) -> CosimRng {
        self.rng
    }

    /// Draws one candidate point from the proposal region.
    #[inline]
    pub fn sample_proposal(&mut self) -> Point3 {
        self.proposal.sample(&mut self.rng)
    }

    /// Whether `point` lies inside the target region.
    #[inline]
    pub fn is_accepted(&self, point: &Point3) -> bool {
        self.target.contains(point)
    }

    /// Draws proposals until `target_successes` have been accepted.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::Config`] if `target_successes` is zero or above
    ///   the sample cap.
    /// - [`SamplingError::TrialLimitExceeded`] if the configured trial
    ///   ceiling is reached first.
    pub fn run(&mut self, target_successes: u64) -> Result<Tally> {
        validate_sample_count(target_successes)?;
        let limit = self.config.trial_limit(target_successes);

        let mut tally = Tally::default();
        while tally.successes < target_successes {
            if limit.is_some_and(|limit| tally.trials >= limit) {
                warn!(
                    limit = tally.trials,
                    successes = tally.successes,
                    target = target_successes,
                    "trial limit reached"
                );
                return Err(SamplingError::TrialLimitExceeded {
                    limit: tally.trials,
                    successes: tally.successes,
                });
            }

            tally.trials += 1;
            let point = self.sample_proposal();
            if self.is_accepted(&point) {
                tally.successes += 1;
            }
        }

        debug!(
            target = target_successes,
            trials = tally.trials,
            "run complete"
        );
        Ok(tally)
    }

    /// Volume estimate from a tally: acceptance ratio × proposal volume.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::EmptyTally`] if the tally has no trials.
    pub fn estimate(&self, tally: &Tally) -> Result<f64> {
        tally
            .acceptance_ratio()
            .map(|ratio| ratio * self.proposal.volume())
            .ok_or(SamplingError::EmptyTally)
    }

    /// Relative error `|1 − estimate / exact|` against the target's exact
    /// volume, or `None` if the target has none.
    pub fn relative_error(&self, estimate: f64) -> Option<f64> {
        self.target
            .exact_volume()
            .map(|exact| (1.0 - estimate / exact).abs())
    }

    /// Single-run mode: one run of `samples` successes.
    ///
    /// # Errors
    ///
    /// Propagates [`run`](Self::run) errors, and returns
    /// [`SamplingError::MissingReferenceVolume`] if the target has no exact
    /// volume. The reference is checked before any sample is drawn.
    pub fn integrate(&mut self, samples: u64) -> Result<IntegrationResult> {
        let exact = self
            .target
            .exact_volume()
            .ok_or(SamplingError::MissingReferenceVolume)?;

        let tally = self.run(samples)?;
        let estimate = self.estimate(&tally)?;

        Ok(IntegrationResult {
            estimate,
            trials: tally.trials,
            successes: tally.successes,
            error: (1.0 - estimate / exact).abs(),
        })
    }

    /// Sweep mode: one fresh-tally run per count in `range`.
    ///
    /// The generator stream continues across runs.
    ///
    /// # Errors
    ///
    /// Stops at the first failing run and returns its error; see
    /// [`integrate`](Self::integrate).
    pub fn sweep(&mut self, range: &SweepRange) -> Result<Vec<SweepPoint>> {
        let mut points = Vec::new();

        for sample_count in range.counts() {
            let result = self.integrate(sample_count)?;
            debug!(
                sample_count,
                estimate = result.estimate,
                error = result.error,
                "sweep step"
            );
            points.push(SweepPoint {
                sample_count,
                estimate: result.estimate,
                error: result.error,
            });
        }

        Ok(points)
    }
}

/// Sampler for the cosine solid inside its unit cylinder.
///
/// ```rust
/// use cosim_core::mc::{cosine_solid, SamplerConfig, CYL_VOL};
///
/// let mut sampler = cosine_solid(SamplerConfig::default());
/// let result = sampler.integrate(100).unwrap();
/// assert!(result.estimate > 0.0 && result.estimate <= CYL_VOL);
/// ```
pub fn cosine_solid(config: SamplerConfig) -> RejectionSampler<Cylinder, CosineSolid> {
    RejectionSampler::new(Cylinder, CosineSolid, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::config::MAX_SAMPLES;
    use crate::mc::error::ConfigError;
    use crate::mc::geometry::{ANALYTICAL, CYL_VOL};
    use crate::mc::region::{FnProposal, Membership};
    use approx::assert_relative_eq;

    /// Unit cube proposal in the positive octant.
    fn unit_cube() -> FnProposal<impl Fn(&mut CosimRng) -> Point3> {
        FnProposal::new(1.0, |rng: &mut CosimRng| {
            Point3::new(rng.uniform(), rng.uniform(), rng.uniform())
        })
    }

    #[test]
    fn test_run_reaches_target() {
        let mut sampler = cosine_solid(SamplerConfig::default());
        let tally = sampler.run(1000).unwrap();

        assert_eq!(tally.successes, 1000);
        assert!(tally.trials >= tally.successes);
    }

    #[test]
    fn test_default_seed_run_is_recorded() {
        let mut sampler = cosine_solid(SamplerConfig::default());
        let result = sampler.integrate(1000).unwrap();

        assert_eq!(result.trials, 2035);
        assert_eq!(result.successes, 1000);
        assert_relative_eq!(result.estimate, 4.849_928_452_623_764, epsilon = 1e-12);
        assert_relative_eq!(result.error, 0.017_199_017_199_017, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_target_rejected() {
        let mut sampler = cosine_solid(SamplerConfig::default());
        let before = sampler.rng().clone();

        assert_eq!(
            sampler.run(0),
            Err(SamplingError::Config(ConfigError::InvalidSampleCount(0)))
        );
        assert!(matches!(
            sampler.run(MAX_SAMPLES + 1),
            Err(SamplingError::Config(ConfigError::InvalidSampleCount(_)))
        ));
        // Rejected runs draw nothing
        assert_eq!(sampler.rng(), &before);
    }

    #[test]
    fn test_estimate_empty_tally() {
        let sampler = cosine_solid(SamplerConfig::default());
        assert_eq!(
            sampler.estimate(&Tally::default()),
            Err(SamplingError::EmptyTally)
        );
    }

    #[test]
    fn test_estimate_formula() {
        let sampler = cosine_solid(SamplerConfig::default());
        let tally = Tally {
            trials: 4,
            successes: 2,
        };

        assert_relative_eq!(sampler.estimate(&tally).unwrap(), ANALYTICAL);
        assert_relative_eq!(sampler.relative_error(ANALYTICAL).unwrap(), 0.0);
        assert_relative_eq!(sampler.relative_error(CYL_VOL).unwrap(), 1.0);
    }

    #[test]
    fn test_trial_limit_guards_empty_target() {
        let config = SamplerConfig::builder()
            .max_trials_per_success(10)
            .build()
            .unwrap();
        let never = |_: &Point3| false;
        let mut sampler = RejectionSampler::new(unit_cube(), never, config);

        assert_eq!(
            sampler.run(5),
            Err(SamplingError::TrialLimitExceeded {
                limit: 50,
                successes: 0
            })
        );
    }

    #[test]
    fn test_always_accepting_target() {
        let always = |_: &Point3| true;
        let mut sampler = RejectionSampler::new(unit_cube(), always, SamplerConfig::default());
        let tally = sampler.run(100).unwrap();

        assert_eq!(tally.trials, 100);
        assert_relative_eq!(sampler.estimate(&tally).unwrap(), 1.0);
        assert_eq!(sampler.relative_error(1.0), None);
    }

    #[test]
    fn test_integrate_requires_reference_volume() {
        let half = |p: &Point3| p.x < 0.5;
        let mut sampler = RejectionSampler::new(unit_cube(), half, SamplerConfig::default());
        let before = sampler.rng().clone();

        assert_eq!(
            sampler.integrate(10),
            Err(SamplingError::MissingReferenceVolume)
        );
        assert_eq!(sampler.rng(), &before);
    }

    #[test]
    fn test_trivial_shapes_integrate() {
        let corner = Membership::new(|p: &Point3| p.x < 0.5 && p.y < 0.5 && p.z < 0.5)
            .with_exact_volume(0.125);
        let mut sampler = RejectionSampler::new(unit_cube(), corner, SamplerConfig::default());
        let result = sampler.integrate(20_000).unwrap();

        assert_relative_eq!(result.estimate, 0.125, epsilon = 0.005);
        assert!(result.error < 0.05, "error = {}", result.error);
    }

    #[test]
    fn test_with_rng_continues_stream() {
        let mut rng = CosimRng::new(9);
        rng.draw64();
        let mut expected = rng.clone();

        let mut sampler =
            RejectionSampler::with_rng(Cylinder, CosineSolid, SamplerConfig::default(), rng);
        let p = sampler.sample_proposal();
        assert_eq!(p, Cylinder.sample(&mut expected));
        assert_eq!(sampler.into_rng(), expected);
    }

    #[test]
    fn test_sweep_is_not_reseeded() {
        let range = SweepRange::new(100, 300, 100).unwrap();
        let mut swept = cosine_solid(SamplerConfig::default());
        let points = swept.sweep(&range).unwrap();

        let mut manual = cosine_solid(SamplerConfig::default());
        let first = manual.integrate(100).unwrap();
        let second = manual.integrate(200).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].estimate, first.estimate);
        assert_eq!(points[1].estimate, second.estimate);
        assert_eq!(swept.rng(), manual.rng());
    }

    #[test]
    fn test_long_sweep_fails_without_preallocating() {
        let config = SamplerConfig::builder()
            .max_trials_per_success(2)
            .build()
            .unwrap();
        let empty = Membership::new(|_: &Point3| false).with_exact_volume(1.0);
        let mut sampler = RejectionSampler::new(unit_cube(), empty, config);

        let range = SweepRange::new(1, MAX_SAMPLES + 1, 1).unwrap();
        assert_eq!(range.len(), 1_000_000_000);

        assert!(matches!(
            sampler.sweep(&range),
            Err(SamplingError::TrialLimitExceeded {
                limit: 2,
                successes: 0
            })
        ));
    }
}
