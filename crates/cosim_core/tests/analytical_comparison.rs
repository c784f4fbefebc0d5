//! Analytical comparison tests for the rejection-sampling integrator.
//!
//! These tests verify that the volume estimate converges to the closed-form
//! volume π²/2 of the cosine solid.
//!
//! # Test Categories
//!
//! 1. **Bounds**: every estimate lies in (0, π²]
//! 2. **Convergence**: error shrinks as the success count grows
//! 3. **Properties**: invariants over arbitrary seeds

use approx::assert_relative_eq;
use cosim_core::mc::{cosine_solid, SamplerConfig, ANALYTICAL, CYL_VOL};
use proptest::prelude::*;

fn seeded(seed: u64) -> SamplerConfig {
    SamplerConfig::builder().seed(seed).build().unwrap()
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_large_run_close_to_analytical() {
    let mut sampler = cosine_solid(seeded(2024));
    let result = sampler.integrate(200_000).unwrap();

    // Binomial standard error of the ratio at p = 1/2 over ~400k trials
    // is under 0.1%; allow a wide margin.
    assert_relative_eq!(result.estimate, ANALYTICAL, max_relative = 0.01);
    assert!(result.error < 0.01, "error = {}", result.error);
}

#[test]
fn test_error_shrinks_with_sample_count() {
    let seeds = 1..=20u64;
    let total = seeds.clone().count();

    let improved = seeds
        .filter(|&seed| {
            let small = cosine_solid(seeded(seed)).integrate(100).unwrap();
            let large = cosine_solid(seeded(seed)).integrate(100_000).unwrap();
            large.error < small.error
        })
        .count();

    assert!(
        improved * 100 >= total * 95,
        "only {} of {} seeds improved",
        improved,
        total
    );
}

#[test]
fn test_efficiency_near_one_half() {
    let mut sampler = cosine_solid(seeded(7));
    let result = sampler.integrate(50_000).unwrap();

    // Acceptance ratio equals ANALYTICAL / CYL_VOL = 1/2
    assert_relative_eq!(result.efficiency_percent(), 50.0, epsilon = 1.0);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_estimate_within_cylinder(seed in any::<u64>(), samples in 1u64..2_000) {
        let mut sampler = cosine_solid(seeded(seed));
        let result = sampler.integrate(samples).unwrap();

        prop_assert!(result.estimate > 0.0 && result.estimate <= CYL_VOL,
            "estimate {} outside (0, {}]", result.estimate, CYL_VOL);
        prop_assert!(result.trials >= result.successes);
        prop_assert_eq!(result.successes, samples);
        prop_assert!((0.0..=1.0).contains(&result.error));
    }

    #[test]
    fn prop_same_seed_same_result(seed in any::<u64>(), samples in 1u64..500) {
        let a = cosine_solid(seeded(seed)).integrate(samples).unwrap();
        let b = cosine_solid(seeded(seed)).integrate(samples).unwrap();
        prop_assert_eq!(a, b);
    }
}
