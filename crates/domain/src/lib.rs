//! Domain layer for Lagify
//!
//! Holds the latency configuration model, the injected error, and the small
//! value objects describing how an invocation is wrapped and how it ended.
//! This layer performs no I/O and draws no random numbers.

pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, INJECTED_ERROR_MESSAGE, InjectedError};
pub use value_objects::*;
