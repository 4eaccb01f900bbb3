use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Env var checked before `RUST_LOG`.
pub const LOG_ENV: &str = "PRODUCT_BROWSER_LOG";

/// Install the global subscriber, appending to the configured log file.
/// The terminal is owned by the UI, so nothing is written to stdout/stderr.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    tracing::debug!("Logging to {}", path.display());
    Ok(())
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&config.level))
}
