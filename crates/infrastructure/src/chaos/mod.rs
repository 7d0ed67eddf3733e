//! Latency and fault injection engine.
//!
//! Wraps async operations so every invocation waits a random, uniformly drawn
//! delay and, with a configured probability, fails with an [`InjectedError`]
//! instead of completing.
//!
//! # Overview
//!
//! The engine consists of:
//! - `RandomSource`: The injected, optionally seeded random generator
//! - `random_delay` / `should_fail`: The two leaf primitives
//! - `LatencyInjector`: Holds one configuration and runs the decision/delay steps
//! - `Lagged` / `LaggedHandler`: Wrapped direct-call and handler-style operations
//! - `LatencyMiddleware`: A request/response/continuation gate
//!
//! # Example
//!
//! ```ignore
//! use domain::{InjectedError, LatencyConfig};
//! use infrastructure::chaos::with_latency;
//!
//! let double = with_latency(
//!     |x: u32| async move { Ok::<_, InjectedError>(x * 2) },
//!     LatencyConfig::new(10, 20, 0.0),
//! );
//!
//! assert_eq!(double.call(5).await?, 10);
//! ```
//!
//! [`InjectedError`]: domain::InjectedError

mod decider;
mod delay;
mod injector;
mod middleware;
mod random_source;
mod wrapper;

pub use decider::should_fail;
pub use delay::{random_delay, sample_delay};
pub use injector::LatencyInjector;
pub use middleware::{LatencyMiddleware, latency_middleware};
pub use random_source::RandomSource;
pub use wrapper::{Continuation, Lagged, LaggedHandler, with_latency};
