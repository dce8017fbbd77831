//! Prober trait abstraction.
//!
//! Defines a common interface for anything that can test a single target,
//! so the scheduler can be driven by the real TCP prober or by a test double.

use crate::types::Target;
use async_trait::async_trait;
use std::fmt;

/// Outcome of a single probe.
///
/// Deliberately not a `Result`: a refused, unreachable or timed-out connect is
/// an ordinary answer, not a failure of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// The connection was established within the timeout.
    Open,
    /// Anything else.
    Closed,
}

impl ProbeOutcome {
    /// Check if the port is open.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for ProbeOutcome {
    fn from(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

impl From<ProbeOutcome> for bool {
    fn from(outcome: ProbeOutcome) -> Self {
        outcome.is_open()
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Trait for single-target probe implementations.
///
/// Implementations must return in bounded time and must release any socket
/// they open on every path, including when the returned future is dropped.
///
/// # Example
///
/// ```ignore
/// use portprobe::scanner::{Prober, ProbeOutcome};
/// use portprobe::types::Target;
///
/// async fn check<P: Prober>(prober: &P, target: Target) -> bool {
///     prober.probe(target).await.is_open()
/// }
/// ```
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single target.
    async fn probe(&self, target: Target) -> ProbeOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_outcome_display() {
        assert_eq!(ProbeOutcome::Open.to_string(), "open");
        assert_eq!(ProbeOutcome::Closed.to_string(), "closed");
    }

    #[test]
    fn test_probe_outcome_bool_conversion() {
        assert!(ProbeOutcome::Open.is_open());
        assert!(!bool::from(ProbeOutcome::Closed));
        assert_eq!(ProbeOutcome::from(true), ProbeOutcome::Open);
        assert_eq!(ProbeOutcome::from(false), ProbeOutcome::Closed);
    }
}
