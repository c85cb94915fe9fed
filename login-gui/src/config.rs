use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::filter;

use crate::state::{debounce::DEFAULT_DELAY, SubmitPolicy};

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

fn default_debounce_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if true and no log level is set.
    pub debug: Option<bool>,
    /// Quiet period before the form validity is recomputed.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub submit_policy: SubmitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            debug: None,
            debounce_ms: default_debounce_ms(),
            submit_policy: SubmitPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
        })?;
        let config = toml::from_str::<Config>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Loads the configuration file, falling back to the defaults if it does
    /// not exist.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => {
                tracing::debug!("no configuration file at {}", path.display());
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Error while writing file: {0}")]
    WritingFile(String),
    #[error("Failed to get default configuration directory")]
    NoConfigDir,
}

/// Path of the configuration file in the user's configuration directory.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    path.push("login-gui");
    path.push(DEFAULT_FILE_NAME);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.debounce_delay(), Duration::from_millis(500));
        assert_eq!(config.submit_policy, SubmitPolicy::FocusInvalid);
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::INFO));
    }

    #[test]
    fn parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
            log_level = "trace"
            debounce_ms = 250
            submit_policy = "disable_button"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::TRACE));
        assert_eq!(config.debounce_delay(), Duration::from_millis(250));
        assert_eq!(config.submit_policy, SubmitPolicy::DisableButton);
    }

    #[test]
    fn debug_flag_lowers_the_default_level() {
        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::DEBUG));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "log_level = \"loud\"").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "submit_policy = \"never\"").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ReadingFile(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
        assert_eq!(Config::from_file_or_default(&path), Ok(Config::default()));
    }

    #[test]
    fn written_file_is_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let config = Config {
            log_level: Some("debug".to_string()),
            debug: None,
            debounce_ms: 100,
            submit_policy: SubmitPolicy::DisableButton,
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path), Ok(config));
    }
}
