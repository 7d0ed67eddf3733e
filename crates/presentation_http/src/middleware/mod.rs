//! HTTP middleware components

pub mod latency;

pub use latency::{LatencyLayer, LatencyService};
