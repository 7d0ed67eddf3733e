//! Uniform random delay generator.

use std::time::Duration;

use domain::LatencyConfig;

use super::RandomSource;

/// Draw a delay in milliseconds, uniform over `[min(min,max), max(min,max)]`.
///
/// The bounds may come in either order and may be equal (including `0, 0`).
/// Consumes exactly one draw from `rng`.
pub fn random_delay(min: u64, max: u64, rng: &RandomSource) -> u64 {
    rng.range_inclusive(min.min(max), min.max(max))
}

/// Draw a delay for the given configuration
pub fn sample_delay(config: &LatencyConfig, rng: &RandomSource) -> Duration {
    let (lo, hi) = config.bounds();
    Duration::from_millis(random_delay(lo, hi, rng))
}
