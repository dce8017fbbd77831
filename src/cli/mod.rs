//! Command-line interface.
//!
//! The number of positional arguments selects the mode:
//! - `portprobe` scans 127.0.0.1 ports 1-1024
//! - `portprobe <host>` scans `host` ports 1-1024
//! - `portprobe <host> <start_port> <end_port>` scans the given range

mod scan;

pub use scan::{run, ScanCommand, Stage};

use crate::config::DEFAULT_HOST;
use crate::error::UsageError;
use crate::types::PortRange;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use tracing::debug;

/// A concurrent TCP connect port scanner.
///
/// Only scan systems you own or have permission to test.
#[derive(Parser, Debug, Default)]
#[command(name = "portprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent TCP connect port scanner", long_about = None)]
#[command(override_usage = "portprobe [host] [start_port end_port]")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Host name or IP address to scan [default: 127.0.0.1]
    #[arg(value_name = "HOST")]
    pub host: Option<String>,

    /// First port of the inclusive range [default: 1]
    #[arg(value_name = "START_PORT")]
    pub start_port: Option<String>,

    /// Last port of the inclusive range [default: 1024]
    #[arg(value_name = "END_PORT")]
    pub end_port: Option<String>,
}

impl Cli {
    /// Number of positional arguments supplied.
    pub fn arg_count(&self) -> usize {
        [&self.host, &self.start_port, &self.end_port]
            .iter()
            .filter(|arg| arg.is_some())
            .count()
    }

    /// Validate the arguments and turn them into a scan command.
    pub fn into_command(self) -> Result<ScanCommand, UsageError> {
        let count = self.arg_count();

        match (self.host, self.start_port, self.end_port) {
            (None, None, None) => Ok(ScanCommand::new(
                DEFAULT_HOST.to_string(),
                PortRange::default(),
            )),
            (Some(host), None, None) => Ok(ScanCommand::new(host, PortRange::default())),
            (Some(host), Some(start), Some(end)) => {
                let range = PortRange::parse(&start, &end)?;
                Ok(ScanCommand::new(host, range))
            }
            _ => Err(UsageError::WrongArgCount(count)),
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Scan(ScanCommand),
    /// `--help` or `--version`: the rendered text, to be shown as-is.
    Info(String),
}

/// Parse a full argument vector (program name first).
///
/// `--help` and `--version` come back as [`Invocation::Info`] so the caller
/// decides how to print and exit. Anything else clap rejects, such as a fourth
/// positional argument, is reported as a usage error.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let given = args.len().saturating_sub(1);

    match Cli::try_parse_from(args) {
        Ok(cli) => cli.into_command().map(Invocation::Scan),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(e.render().to_string()))
        }
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            Err(UsageError::WrongArgCount(given))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortError;

    fn parse(args: &[&str]) -> Result<ScanCommand, UsageError> {
        match parse_info(args)? {
            Invocation::Scan(cmd) => Ok(cmd),
            Invocation::Info(text) => panic!("unexpected info output: {}", text),
        }
    }

    fn parse_info(args: &[&str]) -> Result<Invocation, UsageError> {
        parse_from(std::iter::once("portprobe").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cmd = parse(&[]).unwrap();
        assert_eq!(cmd.host, "127.0.0.1");
        assert_eq!(cmd.range, PortRange::default());
    }

    #[test]
    fn test_host_only() {
        let cmd = parse(&["example.com"]).unwrap();
        assert_eq!(cmd.host, "example.com");
        assert_eq!(cmd.range.to_string(), "1 - 1024");
    }

    #[test]
    fn test_host_and_range() {
        let cmd = parse(&["10.0.0.5", "20", "25"]).unwrap();
        assert_eq!(cmd.host, "10.0.0.5");
        assert_eq!(cmd.range.start().as_u16(), 20);
        assert_eq!(cmd.range.end().as_u16(), 25);
    }

    #[test]
    fn test_boundary_ranges_accepted() {
        assert_eq!(parse(&["h", "1", "1"]).unwrap().range.len(), 1);
        assert_eq!(parse(&["h", "65535", "65535"]).unwrap().range.len(), 1);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        assert_eq!(
            parse(&["h", "0", "10"]),
            Err(UsageError::InvalidPorts(PortError::OutOfRange(0)))
        );
        assert_eq!(
            parse(&["h", "1", "65536"]),
            Err(UsageError::InvalidPorts(PortError::OutOfRange(65536)))
        );
        assert_eq!(
            parse(&["host", "10", "5"]),
            Err(UsageError::InvalidPorts(PortError::InvalidRange(10, 5)))
        );
        assert!(matches!(
            parse(&["h", "ssh", "80"]),
            Err(UsageError::InvalidPorts(PortError::InvalidFormat(_)))
        ));
        assert!(matches!(
            parse(&["h", "-5", "80"]),
            Err(UsageError::InvalidPorts(PortError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(parse(&["h", "80"]), Err(UsageError::WrongArgCount(2)));
        assert_eq!(
            parse(&["h", "1", "2", "3"]),
            Err(UsageError::WrongArgCount(4))
        );
        assert_eq!(parse(&["--bogus"]), Err(UsageError::WrongArgCount(1)));
    }

    #[test]
    fn test_help_is_returned_not_exited() {
        let Ok(Invocation::Info(text)) = parse_info(&["--help"]) else {
            panic!("--help did not produce help text");
        };
        assert!(text.contains("portprobe [host] [start_port end_port]"));

        let Ok(Invocation::Info(text)) = parse_info(&["-h"]) else {
            panic!("-h did not produce help text");
        };
        assert!(text.contains("START_PORT"));
    }

    #[test]
    fn test_version_is_returned_not_exited() {
        let Ok(Invocation::Info(text)) = parse_info(&["--version"]) else {
            panic!("--version did not produce version text");
        };
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_arg_count() {
        let cli = Cli {
            host: Some("h".into()),
            ..Cli::default()
        };
        assert_eq!(cli.arg_count(), 1);
        assert_eq!(Cli::default().arg_count(), 0);
    }
}
