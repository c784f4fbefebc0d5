//! Error-mode sweeps over increasing sample counts.

use super::config::validate_sample_count;
use super::error::ConfigError;

/// Arithmetic progression of target sample counts.
///
/// Counts run `min, min + step, …` while below `max`. The first count is
/// always produced, so `min >= max` yields the single count `min`. Every
/// count is within [`MAX_SAMPLES`](super::config::MAX_SAMPLES).
///
/// # Examples
///
/// ```rust
/// use cosim_core::mc::SweepRange;
///
/// let range = SweepRange::new(100, 1000, 100).unwrap();
/// let counts: Vec<u64> = range.counts().collect();
/// assert_eq!(counts, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSweepRange"))]
pub struct SweepRange {
    min: u64,
    max: u64,
    step: u64,
}

/// Unchecked wire form; deserialisation goes through [`SweepRange::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSweepRange {
    min: u64,
    max: u64,
    step: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSweepRange> for SweepRange {
    type Error = ConfigError;

    fn try_from(raw: RawSweepRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.step)
    }
}

impl SweepRange {
    /// Creates a validated sweep range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSweep`] if any bound is zero, or
    /// [`ConfigError::InvalidSampleCount`] if the largest count exceeds the
    /// sample cap.
    pub fn new(min: u64, max: u64, step: u64) -> Result<Self, ConfigError> {
        if min == 0 || max == 0 || step == 0 {
            return Err(ConfigError::InvalidSweep { min, max, step });
        }
        let range = Self { min, max, step };
        validate_sample_count(range.last())?;
        Ok(range)
    }

    /// Smallest sample count.
    #[inline]
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Increment between counts.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Largest count the sweep produces.
    pub fn last(&self) -> u64 {
        if self.min >= self.max {
            self.min
        } else {
            // Bounded by max - 1, so no overflow.
            self.min + (self.max - self.min - 1) / self.step * self.step
        }
    }

    /// Number of counts the sweep produces.
    pub fn len(&self) -> usize {
        let steps = (self.last() - self.min) / self.step;
        usize::try_from(steps)
            .ok()
            .and_then(|steps| steps.checked_add(1))
            .unwrap_or(usize::MAX)
    }

    /// Always `false`; a sweep has at least one count.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the sample counts in increasing order.
    pub fn counts(&self) -> impl Iterator<Item = u64> {
        let Self { min, max, step } = *self;
        std::iter::successors(Some(min), move |&n| {
            n.checked_add(step).filter(|&next| next < max)
        })
    }
}

/// One error-mode observation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Target success count of the run.
    pub sample_count: u64,
    /// Volume estimate of the run.
    pub estimate: f64,
    /// Relative error against the exact volume.
    pub error: f64,
}
