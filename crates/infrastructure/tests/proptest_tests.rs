//! Property-based tests for the injection primitives
//!
//! These tests use proptest to verify invariants across many random inputs.

use std::time::Duration;

use domain::{InjectedError, LatencyConfig};
use infrastructure::{LatencyInjector, RandomSource, random_delay, sample_delay, should_fail};
use proptest::prelude::*;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

// ============================================================================
// Delay Generator Property Tests
// ============================================================================

mod delay_tests {
    use super::*;

    proptest! {
        #[test]
        fn delay_within_bounds_for_any_order(
            min in 0u64..1_000_000,
            max in 0u64..1_000_000,
            seed in any::<u64>(),
        ) {
            let rng = RandomSource::seeded(seed);
            let d = random_delay(min, max, &rng);
            prop_assert!(d >= min.min(max));
            prop_assert!(d <= min.max(max));
        }

        #[test]
        fn equal_bounds_are_exact(value in 0u64..1_000_000, seed in any::<u64>()) {
            let rng = RandomSource::seeded(seed);
            prop_assert_eq!(random_delay(value, value, &rng), value);
        }

        #[test]
        fn sampled_duration_within_config(
            min in 0u64..100_000,
            max in 0u64..100_000,
            seed in any::<u64>(),
        ) {
            let config = LatencyConfig::new(min, max, 0.0);
            let d = sample_delay(&config, &RandomSource::seeded(seed));
            prop_assert!(d >= config.min_delay());
            prop_assert!(d <= config.max_delay());
        }

        #[test]
        fn seeded_draws_reproduce(seed in any::<u64>()) {
            let a = RandomSource::seeded(seed);
            let b = RandomSource::seeded(seed);
            for _ in 0..8 {
                prop_assert_eq!(random_delay(0, 10_000, &a), random_delay(0, 10_000, &b));
            }
        }
    }
}

// ============================================================================
// Error Decider Property Tests
// ============================================================================

mod decider_tests {
    use super::*;

    proptest! {
        #[test]
        fn rate_zero_never_fails(seed in any::<u64>()) {
            let rng = RandomSource::seeded(seed);
            for _ in 0..64 {
                prop_assert!(!should_fail(0.0, &rng));
            }
        }

        #[test]
        fn rate_one_always_fails(seed in any::<u64>()) {
            let rng = RandomSource::seeded(seed);
            for _ in 0..64 {
                prop_assert!(should_fail(1.0, &rng));
            }
        }

        #[test]
        fn rates_above_one_saturate(rate in 1.0f64..1_000.0, seed in any::<u64>()) {
            prop_assert!(should_fail(rate, &RandomSource::seeded(seed)));
        }

        #[test]
        fn negative_rates_saturate(rate in -1_000.0f64..=0.0, seed in any::<u64>()) {
            prop_assert!(!should_fail(rate, &RandomSource::seeded(seed)));
        }
    }
}

// ============================================================================
// Wrapper Property Tests
// ============================================================================

mod wrapper_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn direct_mode_forwards_value(x in any::<u32>(), seed in any::<u64>()) {
            let injector = LatencyInjector::seeded(LatencyConfig::new(0, 50, 0.0), seed);
            let double = injector.wrap(|x: u32| async move {
                Ok::<_, InjectedError>(u64::from(x) * 2)
            });

            let result = paused_runtime().block_on(double.call(x));
            prop_assert_eq!(result, Ok(u64::from(x) * 2));
        }

        #[test]
        fn direct_mode_waits_within_window(
            min in 0u64..500,
            max in 0u64..500,
            seed in any::<u64>(),
        ) {
            let config = LatencyConfig::new(min, max, 0.0);
            let injector = LatencyInjector::seeded(config, seed);
            let op = injector.wrap(|_: ()| async { Ok::<_, InjectedError>(()) });

            let elapsed = paused_runtime().block_on(async {
                let start = tokio::time::Instant::now();
                op.call(()).await.unwrap();
                start.elapsed()
            });

            prop_assert!(elapsed >= config.min_delay());
            prop_assert!(elapsed <= config.max_delay() + Duration::from_millis(5));
        }
    }
}
