//! Console output.
//!
//! Everything the user sees goes through here, to any `Write` so the driver
//! can be exercised against an in-memory buffer. Styling comes from `console`,
//! which turns itself off when stdout is not a terminal.

use crate::types::{Port, PortRange};
use console::style;
use std::fmt;
use std::io::{self, Write};
use std::net::IpAddr;

/// Print the banner, target and range, and the permission reminder.
pub fn print_scan_header(out: &mut impl Write, host: &str, range: PortRange) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style(format!("=== portprobe v{} ===", env!("CARGO_PKG_VERSION")))
            .cyan()
            .bold()
    )?;
    writeln!(out, "Target: {}", host)?;
    writeln!(out, "Ports: {}", range)?;
    writeln!(
        out,
        "{}",
        style("Only scan systems you own or have permission to test.").yellow()
    )?;
    writeln!(out)
}

/// Print the address a host name resolved to.
pub fn print_resolved(out: &mut impl Write, host: &str, ip: IpAddr) -> io::Result<()> {
    writeln!(out, "Resolved {} -> {}", host, ip)?;
    writeln!(out)
}

/// Live notification for a newly discovered open port.
pub fn print_open_port(out: &mut impl Write, port: Port) -> io::Result<()> {
    writeln!(out, "{} Open: {}", style("[+]").green().bold(), port)?;
    out.flush()
}

/// Print the final summary.
pub fn print_summary(out: &mut impl Write, open_ports: &[Port]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("=== Scan complete ===").cyan().bold())?;

    if open_ports.is_empty() {
        writeln!(out, "No open ports found in the scanned range.")
    } else {
        writeln!(out, "Open ports found: {}", join_ports(open_ports))
    }
}

/// Print clap's rendered help or version text unchanged.
pub fn print_info(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Print a fatal error message.
pub fn print_error(out: &mut impl Write, msg: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", style(msg).red())
}

fn join_ports(ports: &[Port]) -> String {
    ports
        .iter()
        .map(Port::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
