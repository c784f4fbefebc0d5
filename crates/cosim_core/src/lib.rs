//! # Cosim Core
//!
//! Monte Carlo estimation of the volume of the solid obtained by revolving
//! `y = cos(x)` on `[-π/2, π/2]` about the x axis.
//!
//! The crate has two layers:
//!
//! - [`rng`]: a deterministic, seedable 64-bit generator ([`CosimRng`]) with
//!   uniform, Bernoulli, exponential and categorical draws.
//! - [`mc`]: the rejection-sampling integrator. Candidate points are drawn
//!   uniformly from an enclosing cylinder, tested against the target solid,
//!   and the accept ratio is scaled by the cylinder volume.
//!
//! ## Usage Example
//!
//! ```rust
//! use cosim_core::mc::{cosine_solid, SamplerConfig, ANALYTICAL};
//!
//! let config = SamplerConfig::builder().seed(5555).build().unwrap();
//! let mut sampler = cosine_solid(config);
//!
//! let result = sampler.integrate(1_000).unwrap();
//! assert!(result.trials >= result.successes);
//! assert!((result.estimate - ANALYTICAL).abs() < 0.5);
//! ```
//!
//! Presentation (argument parsing, tables, plotting) lives outside this
//! crate; consumers read [`IntegrationResult`] and [`SweepPoint`] values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    cosine_solid, IntegrationResult, RejectionSampler, SamplerConfig, SamplingError, SweepPoint,
    SweepRange,
};
pub use rng::{CosimRng, DEFAULT_SEED};
