//! Server configuration parsing.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::store::DEFAULT_PARTITION;

/// Server configuration loaded from a TOML file.
///
/// Every section is optional; missing sections and fields take their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Where records are persisted.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database directory.
    pub path: PathBuf,
    /// Name of the partition holding all records.
    pub partition: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("gnolly.db"),
            partition: DEFAULT_PARTITION.to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "gnolly=debug,tower_http=info".
    pub level: String,
    pub format: LogFormat,
    /// "stdout", "stderr", or a file path to append to.
    pub output: String,
    /// ANSI colors, only applied when writing to a terminal.
    pub color: bool,
    pub timestamps: bool,
    /// Include the module path of each event.
    pub target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
            color: true,
            timestamps: true,
            target: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() -> Result<(), ConfigError> {
        let toml = r#"
[server]
bind = "0.0.0.0"
port = 9000

[storage]
path = "/var/lib/gnolly"
partition = "records"

[logging]
level = "debug"
format = "json"
output = "stdout"
timestamps = false
"#;
        let config = Config::from_str(toml)?;
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.storage.path, PathBuf::from("/var/lib/gnolly"));
        assert_eq!(config.storage.partition, "records");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.output, "stdout");
        assert!(!config.logging.timestamps);
        assert!(config.logging.color);
        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> Result<(), ConfigError> {
        let config = Config::from_str("")?;
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.storage.path, PathBuf::from("gnolly.db"));
        assert_eq!(config.storage.partition, "main");
        assert_eq!(config.logging.format, LogFormat::Text);
        Ok(())
    }

    #[test]
    fn test_partial_section() -> Result<(), ConfigError> {
        let config = Config::from_str("[server]\nport = 3000\n")?;
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        Ok(())
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Config::from_str("[logging]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/gnolly.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
