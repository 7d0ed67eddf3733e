//! Invocation mode value object

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Calling convention of a wrapped operation, declared when it is wrapped.
///
/// Decides how an injected failure is reported:
/// - `Direct`: returned as the wrapper's own `Err`
/// - `Handler`: handed to the continuation, the wrapper itself settles normally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    /// Plain async function call
    #[default]
    Direct,
    /// Request/response/continuation step of a processing chain
    Handler,
}

impl InvocationMode {
    /// Get the lowercase name of this mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Handler => "handler",
        }
    }

    /// Whether failures travel through a continuation
    #[must_use]
    pub const fn reports_via_continuation(&self) -> bool {
        matches!(self, Self::Handler)
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvocationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "handler" => Ok(Self::Handler),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}
