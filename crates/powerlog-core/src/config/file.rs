//! File-based logger configuration (YAML)
//!
//! User-level config lives at `~/.config/powerlog/config.yaml`:
//!
//! ```yaml
//! log_name: server
//! log_dir: /var/log/myapp
//! timestamps: true
//! caller: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::{LineFormat, LogError, LogResult};

fn default_true() -> bool {
    true
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log file name stem; file output is enabled when set
    #[serde(default)]
    pub log_name: Option<String>,

    /// Directory holding the log file (defaults to the system temp dir)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Stamp lines with the local date and time
    #[serde(default = "default_true")]
    pub timestamps: bool,

    /// Add the call site to destination lines
    #[serde(default = "default_true")]
    pub caller: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_name: None,
            log_dir: None,
            timestamps: true,
            caller: true,
        }
    }
}

impl LoggerConfig {
    /// Config with file output under `log_dir`
    pub fn with_file(log_name: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_name: Some(log_name.into()),
            log_dir: Some(log_dir.into()),
            ..Self::default()
        }
    }

    /// Path of the user-level config (`~/.config/powerlog/config.yaml`)
    pub fn user_config_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("powerlog").join("config.yaml")
    }

    /// Parse YAML
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LogError::Config(format!("failed to parse logger config: {}", e)))
    }

    /// Parse JSON
    pub fn from_json_str(content: &str) -> LogResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| LogError::Config(format!("failed to parse logger config: {}", e)))
    }

    /// Load a YAML config file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| LogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load the user-level config
    pub fn load_user() -> LogResult<Self> {
        Self::load(Self::user_config_path())
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> LogResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LogError::Config(format!("failed to serialize logger config: {}", e)))
    }

    /// Directory for the log file
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Line format for per-level handles
    pub fn handle_format(&self) -> LineFormat {
        LineFormat {
            timestamp: self.timestamps,
            caller: false,
        }
    }

    /// Line format for the destination
    pub fn destination_format(&self) -> LineFormat {
        LineFormat {
            timestamp: self.timestamps,
            caller: self.caller,
        }
    }
}
