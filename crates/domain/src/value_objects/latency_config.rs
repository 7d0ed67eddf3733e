//! Latency configuration value object

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default lower delay bound in milliseconds
pub const DEFAULT_MIN_MS: u64 = 200;

/// Default upper delay bound in milliseconds
pub const DEFAULT_MAX_MS: u64 = 800;

/// Default probability of an injected failure
pub const DEFAULT_ERROR_RATE: f64 = 0.0;

/// Delay bounds and failure probability for one wrapper or middleware.
///
/// The bounds may be given in either order: `min > max` is not rejected, the
/// pair is normalised every time it is used (see [`LatencyConfig::bounds`]).
/// Missing fields take their defaults and unknown fields are ignored when
/// deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Lower delay bound in milliseconds (default: 200)
    pub min: u64,

    /// Upper delay bound in milliseconds (default: 800)
    pub max: u64,

    /// Probability of failure in `[0, 1]` (default: 0)
    #[serde(alias = "errorRate")]
    pub error_rate: f64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_MS,
            max: DEFAULT_MAX_MS,
            error_rate: DEFAULT_ERROR_RATE,
        }
    }
}

impl LatencyConfig {
    /// Create a configuration with explicit bounds and error rate
    #[must_use]
    pub const fn new(min: u64, max: u64, error_rate: f64) -> Self {
        Self {
            min,
            max,
            error_rate,
        }
    }

    /// Set the lower bound
    #[must_use]
    pub const fn with_min(mut self, min: u64) -> Self {
        self.min = min;
        self
    }

    /// Set the upper bound
    #[must_use]
    pub const fn with_max(mut self, max: u64) -> Self {
        self.max = max;
        self
    }

    /// Set the failure probability
    #[must_use]
    pub const fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    /// Effective `(lo, hi)` bounds with `lo <= hi`
    #[must_use]
    pub const fn bounds(&self) -> (u64, u64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Shortest delay any invocation can see
    #[must_use]
    pub const fn min_delay(&self) -> Duration {
        Duration::from_millis(self.bounds().0)
    }

    /// Longest delay any invocation can see
    #[must_use]
    pub const fn max_delay(&self) -> Duration {
        Duration::from_millis(self.bounds().1)
    }

    /// Whether some invocations may fail
    #[must_use]
    pub fn may_fail(&self) -> bool {
        self.error_rate > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LatencyConfig::default();
        assert_eq!(config.min, 200);
        assert_eq!(config.max, 800);
        assert!((config.error_rate - 0.0).abs() < f64::EPSILON);
        assert!(!config.may_fail());
    }

    #[test]
    fn bounds_keep_ordered_pair() {
        let config = LatencyConfig::new(10, 20, 0.0);
        assert_eq!(config.bounds(), (10, 20));
    }

    #[test]
    fn bounds_swap_reversed_pair() {
        let config = LatencyConfig::new(900, 100, 0.0);
        assert_eq!(config.bounds(), (100, 900));
        assert_eq!(config.min_delay(), Duration::from_millis(100));
        assert_eq!(config.max_delay(), Duration::from_millis(900));
    }

    #[test]
    fn builder_chain() {
        let config = LatencyConfig::default()
            .with_min(1)
            .with_max(5)
            .with_error_rate(1.0);
        assert_eq!(config, LatencyConfig::new(1, 5, 1.0));
        assert!(config.may_fail());
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: LatencyConfig = serde_json::from_str(r#"{"min": 10}"#).unwrap();
        assert_eq!(config.min, 10);
        assert_eq!(config.max, DEFAULT_MAX_MS);
        assert!((config.error_rate - DEFAULT_ERROR_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_accepts_camel_case_error_rate() {
        let config: LatencyConfig =
            serde_json::from_str(r#"{"min": 1, "max": 5, "errorRate": 0.25}"#).unwrap();
        assert!((config.error_rate - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let config: LatencyConfig =
            serde_json::from_str(r#"{"max": 50, "jitter": "gaussian"}"#).unwrap();
        assert_eq!(config.min, DEFAULT_MIN_MS);
        assert_eq!(config.max, 50);
    }

    #[test]
    fn empty_object_is_default() {
        let config: LatencyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LatencyConfig::default());
    }
}
