//! Logging configuration and setup
//!
//! This module provides logging initialization for the EventPass client.
//! Pages render to stdout, so diagnostics go to stderr and, when a file
//! path is configured, to a daily-rolling log file as well.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the appender guard when a log file is configured; the caller
/// must keep it alive for buffered log lines to be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match &config.file_path {
        Some(path) if !path.is_empty() => {
            let file_appender = tracing_appender::rolling::daily(path, "eventpass.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();

            Ok(Some(guard))
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();

            Ok(None)
        }
    }
}

/// Map a `-v` occurrence count to a tracing level directive
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}
