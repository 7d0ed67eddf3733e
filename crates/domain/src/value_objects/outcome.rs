//! Terminal state of one invocation

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an invocation ended.
///
/// Every invocation reaches exactly one of these after its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The wrapped operation or continuation ran normally
    Proceeding,
    /// An injected error was surfaced
    Failing,
}

impl Outcome {
    /// Map an error decision to its terminal state
    #[must_use]
    pub const fn from_decision(fail: bool) -> Self {
        if fail { Self::Failing } else { Self::Proceeding }
    }

    /// Check if this is the failure terminal
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceeding => write!(f, "proceeding"),
            Self::Failing => write!(f, "failing"),
        }
    }
}
