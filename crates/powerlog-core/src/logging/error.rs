//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by logger operations
#[derive(Error, Debug)]
pub enum LogError {
    /// Invalid logger configuration
    #[error("{0}")]
    Config(String),

    /// The log file could not be opened
    #[error("error creating log file: open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A logger config file could not be read
    #[error("error reading logger config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fatal condition raised by `LevelLogger::fatal`
    #[error("{message}")]
    Fatal { message: String },
}

impl LogError {
    /// Error for an empty log name
    pub fn missing_log_name() -> Self {
        Self::Config("log name is required".to_string())
    }

    /// Create a log file open error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a fatal error
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    /// Whether this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type LogResult<T> = Result<T, LogError>;
