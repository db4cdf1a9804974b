use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use picker_core::DEFAULT_CATALOG_SOURCE;
use picker_engine::FetchSettings;
use serde::Deserialize;

use super::logging::LogDestination;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub catalog_source: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub exit_animation_ms: u64,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for PickerConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            catalog_source: DEFAULT_CATALOG_SOURCE.to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
            exit_animation_ms: 300,
            log_destination: LogDestination::File,
            log_file: PathBuf::from("picker.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl PickerConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }

    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Load the RON config at `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<PickerConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PickerConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.catalog_source, "restaurants.csv");
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.ron");
        fs::write(
            &path,
            r#"(catalog_source: "https://example.com/r.csv", exit_animation_ms: 50, log_destination: Both)"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.catalog_source, "https://example.com/r.csv");
        assert_eq!(config.exit_animation(), Duration::from_millis(50));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.max_bytes, FetchSettings::default().max_bytes);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.ron");
        fs::write(&path, "(exit_animation_ms: \"soon\")").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }
}
