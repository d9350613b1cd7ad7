use std::{fs, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "tma-settings";
const LOG_FILE_NAME: &str = "tma-settings.log";

/// Installs the global subscriber writing to the log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout. Keep the
/// returned guard alive until exit or buffered lines are lost.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let directory = log_directory(config);
    fs::create_dir_all(&directory).map_err(|source| AppError::LogDirCreate {
        path: directory.clone(),
        source,
    })?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&directory, LOG_FILE_NAME));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn log_directory(config: &LogConfig) -> PathBuf {
    config.directory.clone().unwrap_or_else(|| {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|base| base.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_wins() {
        let config = LogConfig {
            level: "debug".to_owned(),
            directory: Some(PathBuf::from("/tmp/tma-logs")),
        };

        assert_eq!(log_directory(&config), PathBuf::from("/tmp/tma-logs"));
    }

    #[test]
    fn default_directory_is_app_specific() {
        let directory = log_directory(&LogConfig::default());

        assert!(directory.ends_with(APP_DIR_NAME) || directory == PathBuf::from("."));
    }
}
