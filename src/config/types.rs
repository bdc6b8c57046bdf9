use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the book store lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the store; the client appends `/books` (e.g., "http://localhost:3001").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Log output settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (e.g., "info", "bookshelf=debug"). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `bookshelf/bookshelf.log` under the local data dir.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("bookshelf")
                .join("bookshelf.log"),
        }
    }
}
