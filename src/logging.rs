//! Tracing setup
//!
//! The TUI owns the terminal, so in that mode events go only to a
//! daily-rolling file under the log directory. One-shot CLI commands log to
//! stderr. In both modes `RUST_LOG` overrides the configured filter.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{OnboardPaths, Settings};
use crate::error::{OnboardError, OnboardResult};

const LOG_FILE_PREFIX: &str = "onboard.log";

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging for TUI mode
///
/// Returns a guard that must be kept alive until shutdown so buffered
/// events are flushed.
pub fn init_tui(paths: &OnboardPaths, settings: &Settings) -> OnboardResult<WorkerGuard> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir).map_err(|e| {
        OnboardError::Io(format!("Failed to create {}: {}", log_dir.display(), e))
    })?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(env_filter(settings));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| OnboardError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!(dir = %log_dir.display(), "logging initialized (daily rolling)");
    Ok(guard)
}

/// Initialize logging for one-shot commands
pub fn init_cli(settings: &Settings) -> OnboardResult<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(env_filter(settings));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .map_err(|e| OnboardError::Config(format!("Failed to initialize logging: {}", e)))
}
