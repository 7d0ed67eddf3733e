//! Infrastructure layer - Latency injection engine and runtime plumbing
//!
//! Contains the random source, the delay/decision primitives, the wrappers and
//! middleware built on them, plus configuration loading and logging setup
//! shared by the binaries.

pub mod chaos;
pub mod config;
pub mod telemetry;

pub use chaos::{
    Continuation, Lagged, LaggedHandler, LatencyInjector, LatencyMiddleware, RandomSource,
    latency_middleware, random_delay, sample_delay, should_fail, with_latency,
};
pub use config::{AppConfig, LatencyAppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
