//! Bernoulli failure decision.

use super::RandomSource;

/// Decide whether one invocation fails.
///
/// Draws a uniform value in `[0, 1)` and returns `true` iff it is strictly
/// below `error_rate`. A rate `<= 0` (or NaN) never fails, a rate `>= 1`
/// always fails. Consumes exactly one draw even at those extremes.
pub fn should_fail(error_rate: f64, rng: &RandomSource) -> bool {
    rng.unit() < error_rate
}
