//! Sample points and the fixed cylinder / cosine-solid region pair.
//!
//! The target solid is obtained by revolving `y = cos(x)` on `[-π/2, π/2]`
//! about the x axis. The proposal region is the unit-radius cylinder over the
//! same interval, which contains it.

use std::f64::consts::{FRAC_PI_2, PI};

use super::region::{ProposalRegion, TargetRegion};
use crate::rng::CosimRng;

/// Volume of the bounding cylinder: π r² L with r = 1 and L = π.
pub const CYL_VOL: f64 = PI * PI;

/// Closed-form volume of the cosine solid.
///
/// Disk integration gives π ∫ cos²x dx over [-π/2, π/2] = π²/2, half the
/// cylinder.
pub const ANALYTICAL: f64 = CYL_VOL / 2.0;

/// A candidate point in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// Axial coordinate.
    pub x: f64,
    /// First radial coordinate.
    pub y: f64,
    /// Second radial coordinate.
    pub z: f64,
}

impl Point3 {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the x axis.
    #[inline]
    pub fn radial_distance(&self) -> f64 {
        (self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Radius of the cosine solid's cross-section at `x`.
#[inline]
pub fn target_radius(x: f64) -> f64 {
    x.cos()
}

/// Unit-radius cylinder along the x axis over `[-π/2, π/2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cylinder;

impl ProposalRegion for Cylinder {
    #[inline]
    fn volume(&self) -> f64 {
        CYL_VOL
    }

    /// Draws `r = √U₁`, `θ = 2πU₂` and `x = -π/2 + πU₃`, in that order.
    ///
    /// Taking the square root of the radial uniform makes the (y, z) pair
    /// uniform over the unit disk rather than clustered at its centre.
    #[inline]
    fn sample(&self, rng: &mut CosimRng) -> Point3 {
        let r = rng.uniform().sqrt();
        let theta = 2.0 * PI * rng.uniform();
        let x = -FRAC_PI_2 + PI * rng.uniform();
        Point3::new(x, r * theta.cos(), r * theta.sin())
    }
}

/// Solid of revolution of `cos(x)` about the x axis on `[-π/2, π/2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CosineSolid;

impl TargetRegion for CosineSolid {
    #[inline]
    fn contains(&self, point: &Point3) -> bool {
        point.radial_distance() < target_radius(point.x)
    }

    fn exact_volume(&self) -> Option<f64> {
        Some(ANALYTICAL)
    }
}
