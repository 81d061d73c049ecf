//! Tracing setup for the desktop host.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "portfolio-studio.log";

/// The filter from `RUST_LOG`, or `default_level` when it is unset or
/// unparsable.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber writing to `<log_dir>/portfolio-studio.log`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// lifetime of the process.
pub fn init(log_dir: &Path, default_level: &str) -> WorkerGuard {
    // tracing_appender::rolling::never panics if it cannot open the log
    // file, so the directory must exist first.
    let _ = std::fs::create_dir_all(log_dir);

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    guard
}
