//! Latency injection settings for the demo binaries.

use domain::{DEFAULT_ERROR_RATE, DEFAULT_MAX_MS, DEFAULT_MIN_MS, LatencyConfig};
use serde::{Deserialize, Serialize};

/// Latency injection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyAppConfig {
    /// Lower delay bound in milliseconds
    #[serde(default = "default_min")]
    pub min: u64,

    /// Upper delay bound in milliseconds
    #[serde(default = "default_max")]
    pub max: u64,

    /// Failure probability in `[0, 1]`
    #[serde(default = "default_error_rate", alias = "errorRate")]
    pub error_rate: f64,

    /// Apply the latency layer to every route, not just the demo routes
    #[serde(default)]
    pub global_injection: bool,
}

const fn default_min() -> u64 {
    DEFAULT_MIN_MS
}

const fn default_max() -> u64 {
    DEFAULT_MAX_MS
}

const fn default_error_rate() -> f64 {
    DEFAULT_ERROR_RATE
}

impl Default for LatencyAppConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            error_rate: default_error_rate(),
            global_injection: false,
        }
    }
}

impl LatencyAppConfig {
    /// The injection parameters as a domain value
    pub const fn to_latency_config(&self) -> LatencyConfig {
        LatencyConfig::new(self.min, self.max, self.error_rate)
    }

    /// Whether the error rate lies outside `[0, 1]`
    ///
    /// Such rates still work: they saturate to never or always failing.
    pub fn error_rate_saturates(&self) -> bool {
        !(0.0..=1.0).contains(&self.error_rate)
    }
}
