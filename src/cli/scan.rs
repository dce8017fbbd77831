//! Scan command: validate, resolve, scan, report.

use crate::cli::{parse_from, Invocation};
use crate::config::ScanConfig;
use crate::error::CliResult;
use crate::output;
use crate::scanner::{run_scan, ScanReport, ScanRequest, TcpConnectProber};
use crate::types::{resolve_host, PortRange};
use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::debug;

/// Stages a run moves through, in order. Validation and resolution can abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Validating,
    Resolving,
    Scanning,
    Reporting,
    Done,
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Validating => write!(f, "validating"),
            Self::Resolving => write!(f, "resolving"),
            Self::Scanning => write!(f, "scanning"),
            Self::Reporting => write!(f, "reporting"),
            Self::Done => write!(f, "done"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

/// A validated scan of one host over one port range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    /// Host name or address as typed, without surrounding whitespace.
    pub host: String,
    pub range: PortRange,
}

impl ScanCommand {
    pub fn new(host: impl Into<String>, range: PortRange) -> Self {
        Self {
            host: host.into().trim().to_string(),
            range,
        }
    }

    /// Execute the scan command.
    ///
    /// Writes the header, resolves the host, streams open ports as they are
    /// found, and finishes with the summary.
    pub async fn execute(&self, config: &ScanConfig, out: &mut impl Write) -> CliResult<ScanReport> {
        output::print_scan_header(out, &self.host, self.range)?;

        debug!(stage = %Stage::Resolving, host = %self.host);
        let ip = match resolve_host(&self.host).await {
            Ok(ip) => ip,
            Err(e) => {
                debug!(stage = %Stage::Aborted, error = ?e, "resolution failed");
                output::print_error(out, &e)?;
                return Err(e.into());
            }
        };
        output::print_resolved(out, &self.host, ip)?;

        debug!(stage = %Stage::Scanning, %ip, range = %self.range);
        let request = ScanRequest::new(ip, self.range, config);
        let prober = Arc::new(TcpConnectProber::new(config.timeout()));

        // First write failure wins; the scan itself keeps going.
        let mut write_error: Option<io::Error> = None;
        let report = run_scan(prober, &request, |port| {
            if write_error.is_none() {
                write_error = output::print_open_port(out, port).err();
            }
        })
        .await;
        if let Some(e) = write_error {
            return Err(e.into());
        }

        debug!(stage = %Stage::Reporting, open = report.open_ports.len());
        output::print_summary(out, &report.open_ports)?;

        debug!(stage = %Stage::Done);
        Ok(report)
    }
}

/// Run the whole program against an argument vector (program name first).
///
/// Usage errors are printed before anything else and nothing is scanned.
/// `--help` and `--version` print their text and return `Ok(None)`.
pub async fn run<I, T>(
    args: I,
    config: &ScanConfig,
    out: &mut impl Write,
) -> CliResult<Option<ScanReport>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    debug!(stage = %Stage::Init);

    debug!(stage = %Stage::Validating);
    let command = match parse_from(args) {
        Ok(Invocation::Scan(command)) => command,
        Ok(Invocation::Info(text)) => {
            output::print_info(out, &text)?;
            return Ok(None);
        }
        Err(e) => {
            debug!(stage = %Stage::Aborted, error = %e, "invalid arguments");
            output::print_error(out, &e)?;
            return Err(e.into());
        }
    };

    command.execute(config, out).await.map(Some)
}
