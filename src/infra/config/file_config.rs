use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    domain::host_user::HostUser,
    infra::config::{AppConfig, HostConfig, LogConfig},
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub host: Option<FileHostConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(host) = self.host {
            host.merge_into(&mut config.host);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(directory) = self.directory {
            config.directory = Some(directory);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileHostConfig {
    pub init_data: Option<String>,
    pub user: Option<HostUser>,
    pub theme: Option<FileThemeConfig>,
    pub outbox_path: Option<PathBuf>,
}

impl FileHostConfig {
    fn merge_into(self, config: &mut HostConfig) {
        if let Some(init_data) = self.init_data {
            config.init_data = Some(init_data);
        }

        if let Some(user) = self.user {
            config.user = Some(user);
        }

        if let Some(theme) = self.theme {
            if let Some(bg_color) = theme.bg_color {
                config.theme.bg_color = Some(bg_color);
            }
            if let Some(text_color) = theme.text_color {
                config.theme.text_color = Some(text_color);
            }
        }

        if let Some(outbox_path) = self.outbox_path {
            config.outbox_path = outbox_path;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileThemeConfig {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}
