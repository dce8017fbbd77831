//! Error types for portprobe.
//!
//! Uses `thiserror` for ergonomic error definitions. Only input validation and
//! host resolution can abort a run; a port that fails to connect is a normal
//! scan outcome and never shows up here.

use crate::types::{PortError, ResolutionError};
use std::io;
use thiserror::Error;

/// Command-line input that cannot be turned into a scan.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("Usage: portprobe [host] [start_port end_port]")]
    WrongArgCount(usize),

    #[error("Port numbers must be integers between 1 and 65535, with start <= end.")]
    InvalidPorts(#[from] PortError),
}

/// Invalid scan tuning values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Invalid configuration: worker limit must be at least 1")]
    ZeroWorkers,
}

/// Anything that ends a run before the scan report is printed.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            UsageError::WrongArgCount(2).to_string(),
            "Usage: portprobe [host] [start_port end_port]"
        );
        let err: UsageError = PortError::InvalidRange(10, 5).into();
        assert_eq!(
            err.to_string(),
            "Port numbers must be integers between 1 and 65535, with start <= end."
        );
    }

    #[test]
    fn test_cli_error_is_transparent() {
        let err: CliError = UsageError::WrongArgCount(5).into();
        assert_eq!(err.to_string(), UsageError::WrongArgCount(5).to_string());
    }
}
