//! Run tallies and single-run results.

/// Accept/reject counts of one run.
///
/// `trials >= successes` always holds for tallies produced by
/// [`RejectionSampler::run`](super::RejectionSampler::run).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Proposals drawn.
    pub trials: u64,
    /// Proposals accepted.
    pub successes: u64,
}

impl Tally {
    /// Fraction of proposals accepted, or `None` before the first trial.
    #[inline]
    pub fn acceptance_ratio(&self) -> Option<f64> {
        (self.trials > 0).then(|| self.successes as f64 / self.trials as f64)
    }

    /// Acceptance ratio as a percentage.
    #[inline]
    pub fn efficiency_percent(&self) -> Option<f64> {
        self.acceptance_ratio().map(|ratio| 100.0 * ratio)
    }
}

/// Outcome of a single-run integration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationResult {
    /// Volume estimate: acceptance ratio × proposal volume.
    pub estimate: f64,
    /// Proposals drawn.
    pub trials: u64,
    /// Proposals accepted.
    pub successes: u64,
    /// `|1 - estimate / exact|`.
    pub error: f64,
}

impl IntegrationResult {
    /// Accept/reject counts behind the estimate.
    #[inline]
    pub fn tally(&self) -> Tally {
        Tally {
            trials: self.trials,
            successes: self.successes,
        }
    }

    /// Acceptance ratio as a percentage.
    #[inline]
    pub fn efficiency_percent(&self) -> f64 {
        100.0 * self.successes as f64 / self.trials as f64
    }
}
