//! Scan tuning shared by the driver and the scheduler.
//!
//! Built once at startup and passed down explicitly.

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Host scanned when none is given on the command line.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Per-port connect timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound on probes in flight at once.
pub const DEFAULT_MAX_WORKERS: usize = 100;

const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_WORKERS) {
    Some(n) => n,
    None => panic!("DEFAULT_MAX_WORKERS must be non-zero"),
};

/// Timeout and concurrency settings for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    timeout: Duration,
    max_workers: NonZeroUsize,
}

impl ScanConfig {
    /// Create a configuration, rejecting a zero timeout or zero workers.
    pub fn new(timeout: Duration, max_workers: usize) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        let max_workers = NonZeroUsize::new(max_workers).ok_or(ConfigError::ZeroWorkers)?;

        Ok(Self {
            timeout,
            max_workers,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers.get()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_workers: DEFAULT_WORKERS,
        }
    }
}
