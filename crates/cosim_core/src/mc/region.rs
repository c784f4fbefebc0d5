//! Proposal and target region traits.
//!
//! A [`RejectionSampler`](super::RejectionSampler) is generic over a pair of
//! regions: a proposal region it can sample uniformly and whose volume is
//! known, and a target region contained in it that it can only test points
//! against. Dispatch is static; no trait objects are involved.

use super::geometry::Point3;
use crate::rng::CosimRng;

/// A bounded region that can be sampled uniformly.
pub trait ProposalRegion {
    /// Volume of the region.
    fn volume(&self) -> f64;

    /// Draws one point uniformly from the region.
    fn sample(&self, rng: &mut CosimRng) -> Point3;
}

/// A region that can be tested for membership.
///
/// Plain closures `Fn(&Point3) -> bool` are target regions without a
/// reference volume.
pub trait TargetRegion {
    /// Whether `point` lies inside the region.
    fn contains(&self, point: &Point3) -> bool;

    /// Closed-form volume used as ground truth for error measurement.
    fn exact_volume(&self) -> Option<f64> {
        None
    }
}

impl<F> TargetRegion for F
where
    F: Fn(&Point3) -> bool,
{
    #[inline]
    fn contains(&self, point: &Point3) -> bool {
        self(point)
    }
}

/// Proposal region built from a sampling closure and its volume.
///
/// # Examples
///
/// ```rust
/// use cosim_core::mc::{FnProposal, Point3, ProposalRegion};
/// use cosim_core::rng::CosimRng;
///
/// // Unit cube
/// let cube = FnProposal::new(1.0, |rng: &mut CosimRng| {
///     Point3::new(rng.uniform(), rng.uniform(), rng.uniform())
/// });
///
/// let mut rng = CosimRng::new(1);
/// let p = cube.sample(&mut rng);
/// assert!((0.0..1.0).contains(&p.x));
/// assert_eq!(cube.volume(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct FnProposal<F> {
    volume: f64,
    sampler: F,
}

impl<F> FnProposal<F>
where
    F: Fn(&mut CosimRng) -> Point3,
{
    /// Wraps `sampler`, which must draw uniformly from a region of `volume`.
    pub fn new(volume: f64, sampler: F) -> Self {
        Self { volume, sampler }
    }
}

impl<F> ProposalRegion for FnProposal<F>
where
    F: Fn(&mut CosimRng) -> Point3,
{
    #[inline]
    fn volume(&self) -> f64 {
        self.volume
    }

    #[inline]
    fn sample(&self, rng: &mut CosimRng) -> Point3 {
        (self.sampler)(rng)
    }
}

/// Target region built from a membership closure, optionally carrying its
/// exact volume.
#[derive(Clone, Debug)]
pub struct Membership<F> {
    test: F,
    exact_volume: Option<f64>,
}

impl<F> Membership<F>
where
    F: Fn(&Point3) -> bool,
{
    /// Wraps `test` with no reference volume.
    pub fn new(test: F) -> Self {
        Self {
            test,
            exact_volume: None,
        }
    }

    /// Attaches the closed-form volume of the region.
    pub fn with_exact_volume(mut self, volume: f64) -> Self {
        self.exact_volume = Some(volume);
        self
    }
}

impl<F> TargetRegion for Membership<F>
where
    F: Fn(&Point3) -> bool,
{
    #[inline]
    fn contains(&self, point: &Point3) -> bool {
        (self.test)(point)
    }

    fn exact_volume(&self) -> Option<f64> {
        self.exact_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_target_without_volume() {
        let half_space = |p: &Point3| p.x > 0.0;

        assert!(half_space.contains(&Point3::new(1.0, 0.0, 0.0)));
        assert!(!half_space.contains(&Point3::new(-1.0, 0.0, 0.0)));
        assert_eq!(TargetRegion::exact_volume(&half_space), None);
    }

    #[test]
    fn test_membership_with_volume() {
        let target = Membership::new(|p: &Point3| p.x < 0.5).with_exact_volume(0.5);

        assert!(target.contains(&Point3::new(0.25, 0.0, 0.0)));
        assert_eq!(target.exact_volume(), Some(0.5));
    }

    #[test]
    fn test_fn_proposal_uses_rng() {
        let proposal = FnProposal::new(2.0, |rng: &mut CosimRng| {
            Point3::new(rng.uniform(), 0.0, 0.0)
        });

        let mut a = CosimRng::new(4);
        let mut b = CosimRng::new(4);
        assert_eq!(proposal.sample(&mut a).x, b.uniform());
        assert_eq!(proposal.volume(), 2.0);
    }
}
