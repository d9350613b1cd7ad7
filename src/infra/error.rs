use std::path::PathBuf;

use thiserror::Error;

use crate::infra::init_data::InitDataError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to create log directory at {path}: {source}")]
    LogDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to write outbox at {path}: {source}")]
    OutboxWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid init data: {0}")]
    InitData(#[from] InitDataError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
