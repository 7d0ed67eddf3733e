//! Lagify HTTP presentation layer
//!
//! Binds the latency injection engine to axum: a tower layer for whole
//! routers or single routes, a wrapper for individual handlers, and the demo
//! server's routes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use handlers::lagged;
pub use middleware::{LatencyLayer, LatencyService};
pub use routes::{create_router, create_router_with_rng};
pub use server::{DEFAULT_LOG_FILTER, Drain, drain_with_timeout};
