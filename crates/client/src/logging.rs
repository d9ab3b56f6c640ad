//! Logging to stderr and a per-session file.
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber and returns the file writer's guard.
///
/// Keep the guard alive for the whole run; dropping it flushes and closes the
/// log file.
pub fn setup_logging(session_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(session_dir)?;

    let file_appender = tracing_appender::rolling::never(session_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Log file: {}/client.log", session_dir.display());
    Ok(guard)
}

/// Platform log directory, e.g. `~/.cache/fight/logs` on Linux.
pub fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "fight")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("fight").join("logs"))
}
