use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, data_dir, log_path};

/// Build the env filter: RUST_LOG wins over the configured level.
fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber.
///
/// Returns the appender guard when logging to a file; it must be held until
/// exit so buffered lines are flushed.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(config);

    if config.file {
        let dir = data_dir();
        fs::create_dir_all(&dir)?;

        let log_file = log_path();
        let file_name = log_file
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid log path: {:?}", log_file))?;
        let appender = tracing_appender::rolling::never(&dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        Ok(None)
    }
}
