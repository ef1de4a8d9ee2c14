//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::StaticConfig;
use crate::errors::{PageStatsError, Result};

const DEFAULT_LOG_NAME: &str = "page-stats.log";

/// Initialize logging system based on configuration
///
/// Sets up file output, log rotation and formatting from `config.logging`.
/// Call once during startup, after the configuration has been loaded.
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so that non-blocking log writes are flushed.
pub fn init_logging(config: &StaticConfig) -> Result<WorkerGuard> {
    let logging = &config.logging;
    let log_file = logging.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if logging.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path.parent().unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_LOG_NAME);

            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(logging.max_backups as usize)
                .build(dir)
                .map_err(|e| {
                    PageStatsError::file_operation(format!("创建滚动日志失败: {}", e))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if logging.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };

    installed
        .map_err(|e| PageStatsError::file_operation(format!("初始化日志系统失败: {}", e)))?;

    Ok(guard)
}
