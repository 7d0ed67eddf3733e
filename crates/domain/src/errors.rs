//! Domain-level errors

use thiserror::Error;

/// Message carried by every injected failure
pub const INJECTED_ERROR_MESSAGE: &str = "fake latency injected error";

/// The synthetic failure produced when an invocation is chosen to fail.
///
/// Carries no payload: downstream handlers can only rely on the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("fake latency injected error")]
pub struct InjectedError;

impl InjectedError {
    /// Create a fresh injected error
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The fixed message of this error
    #[must_use]
    pub const fn message(&self) -> &'static str {
        INJECTED_ERROR_MESSAGE
    }
}

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Unknown invocation mode name
    #[error("Invalid invocation mode: {0}. Use 'direct' or 'handler'")]
    InvalidMode(String),
}
