//! Powerlog Core
//!
//! Leveled logging facade: debug/info/warn/error/panic methods writing
//! prefixed, timestamped lines, with optional redirection to a dated log
//! file (`<dir>/<YYYY-MM-DD>_<name>.log`).
//!
//! ```rust,no_run
//! use powerlog_core::{log_info, LevelLogger};
//!
//! let logger = LevelLogger::new();
//! logger.set_logger_file("server", "/var/log/myapp")?;
//!
//! log_info!(logger, "listening on port", 8080);
//!
//! // Recoverable fatal path: log, then hand the error back
//! let err = logger.fatal(&[&"database unreachable"]);
//! eprintln!("shutting down: {}", err);
//! # Ok::<(), powerlog_core::LogError>(())
//! ```
//!
//! Once a log file is set, each call writes two lines: one on the level's
//! own stream (stdout/stderr) and one in the file.

pub mod logging;
pub mod config;

// Re-export commonly used types
pub use logging::{
    Logger, LoggerExt, SharedLogger,
    LevelLogger, LevelHandle, Level,
    LogError, LogResult,
    Sink, MemoryBuffer, LineFormat, Destination,
    global, install, install_global,
};

pub use config::LoggerConfig;
