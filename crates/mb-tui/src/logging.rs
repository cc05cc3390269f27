//! File logging
//!
//! The birth screens own the terminal, so trace output goes to a log file
//! instead of stderr. Filter with `RUST_LOG`; the default level is INFO.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "mbbirth.log";

/// Install the global subscriber writing to `log_dir/mbbirth.log`.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(guard)
}
