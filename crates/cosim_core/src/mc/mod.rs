//! Rejection-sampling Monte Carlo integration.
//!
//! This module estimates the volume of the solid of revolution of `cos(x)`
//! on `[-π/2, π/2]` by sampling its enclosing unit cylinder.
//!
//! # Architecture
//!
//! ```text
//! RejectionSampler<P, T>
//! ├── SamplerConfig   (seed, trial guard)
//! ├── CosimRng        (owned generator)
//! ├── P: ProposalRegion  (Cylinder)
//! ├── T: TargetRegion    (CosineSolid)
//! └── Orchestration
//!     ├── run()        accept/reject loop → Tally
//!     ├── integrate()  single-run mode    → IntegrationResult
//!     └── sweep()      error mode         → Vec<SweepPoint>
//! ```
//!
//! # Examples
//!
//! ## Single run
//!
//! ```rust
//! use cosim_core::mc::{cosine_solid, SamplerConfig};
//!
//! let mut sampler = cosine_solid(SamplerConfig::default());
//! let result = sampler.integrate(1_000).unwrap();
//!
//! println!(
//!     "Value: {:.4}  Efficiency: {:.1}%  Error: {:.2}%",
//!     result.estimate,
//!     result.efficiency_percent(),
//!     100.0 * result.error
//! );
//! ```
//!
//! ## Error sweep
//!
//! ```rust
//! use cosim_core::mc::{cosine_solid, SamplerConfig, SweepRange};
//!
//! let mut sampler = cosine_solid(SamplerConfig::default());
//! let range = SweepRange::new(100, 1_000, 100).unwrap();
//!
//! let points = sampler.sweep(&range).unwrap();
//! assert_eq!(points.len(), 9);
//! ```
//!
//! ## Custom shapes
//!
//! ```rust
//! use cosim_core::mc::{FnProposal, Membership, Point3, RejectionSampler, SamplerConfig};
//! use cosim_core::rng::CosimRng;
//!
//! let cube = FnProposal::new(1.0, |rng: &mut CosimRng| {
//!     Point3::new(rng.uniform(), rng.uniform(), rng.uniform())
//! });
//! let ball_octant = Membership::new(|p: &Point3| p.x * p.x + p.y * p.y + p.z * p.z < 1.0)
//!     .with_exact_volume(std::f64::consts::PI / 6.0);
//!
//! let mut sampler = RejectionSampler::new(cube, ball_octant, SamplerConfig::default());
//! let result = sampler.integrate(5_000).unwrap();
//! assert!(result.error < 0.1);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod region;
pub mod result;
pub mod sampler;
pub mod sweep;

// Re-exports for convenient access
pub use config::{
    validate_sample_count, SamplerConfig, SamplerConfigBuilder, DEFAULT_TRIALS_PER_SUCCESS,
    MAX_SAMPLES,
};
pub use error::{ConfigError, SamplingError};
pub use geometry::{target_radius, CosineSolid, Cylinder, Point3, ANALYTICAL, CYL_VOL};
pub use region::{FnProposal, Membership, ProposalRegion, TargetRegion};
pub use result::{IntegrationResult, Tally};
pub use sampler::{cosine_solid, RejectionSampler};
pub use sweep::{SweepPoint, SweepRange};
