//! Shared logger instance
//!
//! A lazily created [`LevelLogger`] for code that has no logger of its own
//! to pass around. It behaves exactly like any other instance; creating
//! more loggers does not touch it.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use super::error::LogResult;
use super::level_logger::LevelLogger;

/// Global logger instance
static LOGGER: Lazy<LevelLogger> = Lazy::new(LevelLogger::new);

/// Get the shared logger
pub fn global() -> &'static LevelLogger {
    &LOGGER
}

/// Redirect the shared logger to a dated log file
pub fn set_logger_file(log_name: &str, log_dir: impl AsRef<Path>) -> LogResult<PathBuf> {
    global().set_logger_file(log_name, log_dir)
}

/// Convenience macros logging through the shared logger
#[macro_export]
macro_rules! debug_log {
    ($($value:expr),* $(,)?) => {
        $crate::log_debug!($crate::logging::global() $(, $value)*)
    };
}

#[macro_export]
macro_rules! info_log {
    ($($value:expr),* $(,)?) => {
        $crate::log_info!($crate::logging::global() $(, $value)*)
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($value:expr),* $(,)?) => {
        $crate::log_warn!($crate::logging::global() $(, $value)*)
    };
}

#[macro_export]
macro_rules! error_log {
    ($($value:expr),* $(,)?) => {
        $crate::log_error!($crate::logging::global() $(, $value)*)
    };
}

#[macro_export]
macro_rules! panic_log {
    ($($value:expr),* $(,)?) => {
        $crate::log_panic!($crate::logging::global() $(, $value)*)
    };
}
