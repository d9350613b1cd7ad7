use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::host_user::{HostUser, ThemeParams};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub host: HostConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Directory for the log file; the platform state directory when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

/// What the emulated host exposes to the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostConfig {
    /// Raw launch parameters; takes precedence over `user`.
    pub init_data: Option<String>,
    pub user: Option<HostUser>,
    pub theme: ThemeParams,
    pub outbox_path: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            init_data: None,
            user: None,
            theme: ThemeParams::default(),
            outbox_path: PathBuf::from("outbox.jsonl"),
        }
    }
}
