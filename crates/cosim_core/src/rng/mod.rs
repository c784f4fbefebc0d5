//! # Random Number Generation
//!
//! This module provides the deterministic generator that drives every
//! Monte Carlo draw in the crate.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: identical seeds yield identical streams on every
//!   platform; the generator uses only wrapping integer arithmetic.
//! - **Explicit ownership**: there is no process-wide instance. Callers own a
//!   [`CosimRng`] and lend it to whatever consumes it.
//! - **Ecosystem integration**: [`CosimRng`] implements `rand::RngCore` and
//!   `rand::SeedableRng`, so `rand` adaptors and distributions accept it.
//!
//! ## Usage Example
//!
//! ```rust
//! use cosim_core::rng::CosimRng;
//!
//! let mut rng = CosimRng::new(12345);
//!
//! let raw = rng.draw64();
//! let u = rng.uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let die = rng.categorical(6);
//! assert!((1..=6).contains(&die));
//! # let _ = raw;
//! ```

mod ran;

pub use ran::{CosimRng, DEFAULT_SEED};
