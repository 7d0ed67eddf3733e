//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{InvocationMode, LatencyConfig, Outcome};
use proptest::prelude::*;

// ============================================================================
// LatencyConfig Property Tests
// ============================================================================

mod latency_config_tests {
    use super::*;

    proptest! {
        #[test]
        fn bounds_are_ordered(min in 0u64..100_000, max in 0u64..100_000) {
            let (lo, hi) = LatencyConfig::new(min, max, 0.0).bounds();
            prop_assert!(lo <= hi);
            prop_assert_eq!(lo, min.min(max));
            prop_assert_eq!(hi, min.max(max));
        }

        #[test]
        fn bounds_ignore_argument_order(a in 0u64..100_000, b in 0u64..100_000) {
            let forward = LatencyConfig::new(a, b, 0.0);
            let reversed = LatencyConfig::new(b, a, 0.0);
            prop_assert_eq!(forward.bounds(), reversed.bounds());
        }

        #[test]
        fn delays_match_bounds(min in 0u64..100_000, max in 0u64..100_000) {
            let config = LatencyConfig::new(min, max, 0.0);
            prop_assert!(config.min_delay() <= config.max_delay());
            prop_assert_eq!(config.min_delay().as_millis(), u128::from(config.bounds().0));
        }

        #[test]
        fn json_keeps_error_rate(rate in 0.0f64..=1.0f64) {
            let json = format!(r#"{{"errorRate": {rate}}}"#);
            let config: LatencyConfig = serde_json::from_str(&json).unwrap();
            prop_assert!((config.error_rate - rate).abs() < 1e-12);
        }
    }
}

// ============================================================================
// InvocationMode Property Tests
// ============================================================================

mod invocation_mode_tests {
    use super::*;

    proptest! {
        #[test]
        fn unknown_names_rejected(name in "[a-z]{1,12}") {
            prop_assume!(name != "direct" && name != "handler");
            prop_assert!(name.parse::<InvocationMode>().is_err());
        }
    }
}

// ============================================================================
// Outcome Property Tests
// ============================================================================

mod outcome_tests {
    use super::*;

    proptest! {
        #[test]
        fn decision_maps_to_single_terminal(fail in any::<bool>()) {
            let outcome = Outcome::from_decision(fail);
            prop_assert_eq!(outcome.is_failure(), fail);
        }
    }
}
