//! # portprobe - A Concurrent TCP Connect Port Scanner
//!
//! Given a host and an inclusive port range, portprobe attempts one TCP
//! connection per port, at most `max_workers` at a time, and reports which
//! ports accepted within the timeout.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portprobe::config::ScanConfig;
//! use portprobe::scanner::{scan, ScanRequest};
//! use portprobe::types::PortRange;
//! use std::net::IpAddr;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ip: IpAddr = "127.0.0.1".parse().unwrap();
//!     let range = PortRange::parse("1", "1024").unwrap();
//!     let request = ScanRequest::new(ip, range, &ScanConfig::default());
//!
//!     for port in scan(&request).await {
//!         println!("{} is open", port);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated ports, ranges, targets, and host resolution
//! - [`scanner`] - The TCP probe and the bounded-concurrency scheduler
//! - [`config`] - Timeout and worker limit
//! - [`cli`] - Argument handling and the end-to-end scan command
//! - [`output`] - Console rendering
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{CliError, ConfigError, UsageError};
pub use scanner::{ProbeOutcome, Prober, ScanReport, ScanRequest};
pub use types::{Port, PortRange, ResolutionError, Target};
