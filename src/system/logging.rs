//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use tracing_appender::rolling;

use super::panic_handler::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{CompactorError, Result};

/// Initialize logging system based on configuration
///
/// Output goes to `config.file` when set. Otherwise CLI mode logs to stderr
/// (stdout carries the short URL) and TUI mode discards logs, since console
/// output would corrupt the terminal screen.
///
/// **Note**: This should be called only once during application startup.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &LoggingConfig,
    mode: RunMode,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match (log_file, mode) {
        (Some(log_file), _) if config.enable_rotation => {
            let path = std::path::Path::new(log_file);
            let dir = path.parent().unwrap_or(std::path::Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("url-compactor.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups as usize)
                .build(dir)
                .map_err(|e| CompactorError::io(format!("Failed to create log appender: {}", e)))?;
            Box::new(appender)
        }
        (Some(log_file), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        (None, RunMode::Cli) => Box::new(std::io::stderr()),
        (None, RunMode::Tui) => Box::new(std::io::sink()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        CompactorError::config(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none() && mode == RunMode::Cli);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| CompactorError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}
