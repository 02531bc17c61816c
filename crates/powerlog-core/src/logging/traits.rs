//! Logger trait definition

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::LogResult;

/// Logger abstraction for leveled logging
///
/// Each method takes any number of values; implementations render them with
/// `Display` and join them with a single space (see [`join_values`]).
///
/// Implementations:
/// - `LevelLogger`: per-level handles plus a redirectable destination
pub trait Logger: Send + Sync {
    /// Log at debug level
    fn debug(&self, values: &[&dyn Display]);

    /// Log at info level
    fn info(&self, values: &[&dyn Display]);

    /// Log at warn level
    fn warn(&self, values: &[&dyn Display]);

    /// Log at error level
    fn error(&self, values: &[&dyn Display]);

    /// Log at error level, then panic with the values concatenated
    fn panic(&self, values: &[&dyn Display]) -> !;

    /// Redirect output to `<log_dir>/<YYYY-MM-DD>_<log_name>.log`
    fn set_logger_file(&self, log_name: &str, log_dir: &Path) -> LogResult<PathBuf>;
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug(&[&args]);
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.info(&[&args]);
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.warn(&[&args]);
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.error(&[&args]);
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Render values joined by a single space
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// Render values back to back, with no separator
pub fn concat_values(values: &[&dyn Display]) -> String {
    values.iter().map(|v| v.to_string()).collect()
}

/// Convenience macros for logging any number of `Display` values
///
/// ```
/// use powerlog_core::{log_info, LevelLogger};
///
/// let logger = LevelLogger::new();
/// log_info!(logger, "listening on port", 8080);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warn(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log at panic level, then unwind
#[macro_export]
macro_rules! log_panic {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.panic(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
