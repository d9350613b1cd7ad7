use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::host_user::HostUser;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("must write test config");
        (dir, path)
    }

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let (_dir, path) = write_config(
            r##"[logging]
level = "debug"

[host]
outbox_path = "sent.jsonl"

[host.theme]
bg_color = "#000000"

[host.user]
id = 42
first_name = "Ann"
username = "ann"
"##,
        );

        let config = load(Some(&path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, None);
        assert_eq!(config.host.outbox_path, PathBuf::from("sent.jsonl"));
        assert_eq!(config.host.theme.bg_color.as_deref(), Some("#000000"));
        assert_eq!(config.host.theme.text_color, None);
        assert_eq!(
            config.host.user,
            Some(HostUser {
                username: Some("ann".to_owned()),
                ..HostUser::new(42, "Ann")
            })
        );
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let (_dir, path) = write_config("[host\noutbox_path = 1");

        let error = load(Some(&path)).expect_err("broken config must fail");

        assert!(matches!(error, AppError::ConfigParse { .. }));
        assert!(error.to_string().contains("config.toml"));
    }
}
