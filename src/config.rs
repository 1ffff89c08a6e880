//! # Configuration
//!
//! [`AppConfig`] is read from an optional TOML file, then overridden from
//! `NUBER_*` environment variables, then validated. Missing keys take their
//! defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! channel_capacity = 64
//! page_size = 25
//! log_filter = "nuber_eats=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Request queue length of every resource actor.
    pub channel_capacity: usize,
    /// Restaurants per page in catalogue listings.
    pub page_size: usize,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            page_size: 25,
            log_filter: "info".to_string(),
        }
    }
}

pub struct ConfigLoader {
    file_path: Option<String>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            file_path: None,
            env_prefix: "NUBER_".to_string(),
        }
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Defaults, then the file if one was given, then env overrides.
    pub async fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.file_path {
            Some(file_path) => self.load_from_file(file_path).await?,
            None => AppConfig::default(),
        };
        self.apply_env_overrides(&mut config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    async fn load_from_file(&self, file_path: &str) -> Result<AppConfig, ConfigError> {
        if !Path::new(file_path).exists() {
            return Err(ConfigError::FileNotFound(file_path.to_string()));
        }
        let content = tokio::fs::read_to_string(file_path).await?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn apply_env_overrides(&self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Ok(capacity) = env::var(format!("{}CHANNEL_CAPACITY", self.env_prefix)) {
            config.channel_capacity = capacity.parse().map_err(|e| {
                ConfigError::ValidationError(format!("Invalid channel capacity: {}", e))
            })?;
        }

        if let Ok(page_size) = env::var(format!("{}PAGE_SIZE", self.env_prefix)) {
            config.page_size = page_size
                .parse()
                .map_err(|e| ConfigError::ValidationError(format!("Invalid page size: {}", e)))?;
        }

        if let Ok(log_filter) = env::var(format!("{}LOG", self.env_prefix)) {
            config.log_filter = log_filter;
        }

        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if config.channel_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "channel_capacity must be greater than zero".to_string(),
            ));
        }
        if config.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn defaults_without_file() {
        let config = ConfigLoader::new()
            .with_env_prefix("NUBER_TEST_DEFAULTS_")
            .load()
            .await
            .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn file_values_fill_in_over_defaults() {
        let file = write_config("page_size = 10\n");
        let config = ConfigLoader::new()
            .with_file(file.path())
            .with_env_prefix("NUBER_TEST_FILE_")
            .load()
            .await
            .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.channel_capacity, 32);
    }

    #[tokio::test]
    async fn env_overrides_file() {
        let file = write_config("page_size = 10\nlog_filter = \"warn\"\n");
        env::set_var("NUBER_TEST_ENV_PAGE_SIZE", "5");
        env::set_var("NUBER_TEST_ENV_LOG", "debug");
        let config = ConfigLoader::new()
            .with_file(file.path())
            .with_env_prefix("NUBER_TEST_ENV_")
            .load()
            .await
            .unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_filter, "debug");
    }

    #[tokio::test]
    async fn rejects_bad_input() {
        let missing = ConfigLoader::new()
            .with_file("/nonexistent/nuber.toml")
            .load()
            .await;
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

        let garbage = write_config("page_size = \"many\"\n");
        let parsed = ConfigLoader::new().with_file(garbage.path()).load().await;
        assert!(matches!(parsed, Err(ConfigError::ParseError(_))));

        let zero = write_config("channel_capacity = 0\n");
        let validated = ConfigLoader::new()
            .with_file(zero.path())
            .with_env_prefix("NUBER_TEST_ZERO_")
            .load()
            .await;
        assert!(matches!(validated, Err(ConfigError::ValidationError(_))));
    }
}
