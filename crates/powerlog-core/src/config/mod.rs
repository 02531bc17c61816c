//! Logger configuration
//!
//! `LoggerConfig` is read from YAML (user-level file) or JSON and turned
//! into a logger with `LevelLogger::from_config`.

mod file;

pub use file::LoggerConfig;
