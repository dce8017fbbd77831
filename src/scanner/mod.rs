//! Scanner module - schedules probes over a port range.
//!
//! One probe task is created per port and at most `max_workers` of them are
//! in flight at once. Probes finish in whatever order their connections
//! resolve; the report is sorted only after the last one returns.

pub mod tcp;
pub mod traits;

use crate::config::ScanConfig;
use crate::types::{Port, PortRange, Target};
use futures::stream::{self, StreamExt};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use tcp::{probe, TcpConnectProber};
pub use traits::{ProbeOutcome, Prober};

/// A fully validated scan: where, which ports, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    ip: IpAddr,
    range: PortRange,
    timeout: Duration,
    max_workers: usize,
}

impl ScanRequest {
    /// Create a new scan request from a resolved address.
    pub fn new(ip: IpAddr, range: PortRange, config: &ScanConfig) -> Self {
        Self {
            ip,
            range,
            timeout: config.timeout(),
            max_workers: config.max_workers(),
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn range(&self) -> PortRange {
        self.range
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Every target covered by this request, in port order.
    pub fn targets(&self) -> impl Iterator<Item = Target> + Send + 'static {
        let ip = self.ip;
        self.range.iter().map(move |port| Target::new(ip, port))
    }
}

/// Complete scan results.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub ip: IpAddr,
    pub range: PortRange,
    pub ports_scanned: usize,
    /// Open ports, ascending and without duplicates.
    pub open_ports: Vec<Port>,
}

impl ScanReport {
    pub fn has_open_ports(&self) -> bool {
        !self.open_ports.is_empty()
    }
}

/// Execute a scan with the given prober.
///
/// `on_open` is called as soon as each open port is discovered, in discovery
/// order, before the final report is assembled. A probe task that panics is
/// logged and counted as closed; the scan itself cannot fail.
pub async fn run_scan<P, F>(prober: Arc<P>, request: &ScanRequest, mut on_open: F) -> ScanReport
where
    P: Prober + 'static,
    F: FnMut(Port),
{
    let start_time = Instant::now();
    let ports_scanned = request.range().len();

    debug!(
        ip = %request.ip(),
        range = %request.range(),
        max_workers = request.max_workers(),
        "starting scan"
    );

    let mut completions = stream::iter(request.targets())
        .map(|target| {
            let prober = Arc::clone(&prober);

            async move {
                let handle = tokio::spawn(async move { prober.probe(target).await });
                (target.port(), handle.await)
            }
        })
        // Each buffered future owns one spawned probe, so this is the worker cap.
        .buffer_unordered(request.max_workers());

    let mut open_ports = Vec::new();

    while let Some((port, joined)) = completions.next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(port = port.as_u16(), error = %e, "probe task failed, treating port as closed");
                ProbeOutcome::Closed
            }
        };

        if outcome.is_open() {
            debug!(port = port.as_u16(), "open port discovered");
            on_open(port);
            open_ports.push(port);
        }
    }

    open_ports.sort_unstable();
    open_ports.dedup();

    info!(
        ports_scanned,
        open = open_ports.len(),
        duration_ms = start_time.elapsed().as_millis() as u64,
        "scan complete"
    );

    ScanReport {
        ip: request.ip(),
        range: request.range(),
        ports_scanned,
        open_ports,
    }
}

/// Scan a request over TCP connect and return the open ports in ascending order.
pub async fn scan(request: &ScanRequest) -> Vec<Port> {
    let prober = Arc::new(TcpConnectProber::new(request.timeout()));
    run_scan(prober, request, |_| {}).await.open_ports
}
