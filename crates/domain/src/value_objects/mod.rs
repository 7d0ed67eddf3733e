//! Value Objects - Immutable, identity-less domain primitives

mod invocation_mode;
mod latency_config;
mod outcome;

pub use invocation_mode::InvocationMode;
pub use latency_config::{DEFAULT_ERROR_RATE, DEFAULT_MAX_MS, DEFAULT_MIN_MS, LatencyConfig};
pub use outcome::Outcome;
