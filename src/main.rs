use anyhow::Context;
use portprobe::cli;
use portprobe::config::{ScanConfig, DEFAULT_MAX_WORKERS, DEFAULT_TIMEOUT};
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let config = ScanConfig::new(DEFAULT_TIMEOUT, DEFAULT_MAX_WORKERS)
        .context("invalid built-in scan configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match runtime.block_on(cli::run(std::env::args_os(), &config, &mut out)) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(error = ?e, "run aborted");
            Ok(ExitCode::FAILURE)
        }
    }
}
