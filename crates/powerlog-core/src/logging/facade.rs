//! `log` crate backend
//!
//! Installing a [`LevelLogger`] as the `log` backend routes `log::info!` and
//! friends from any crate through it. Records are never filtered.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use super::global::global;
use super::level::Level;
use super::level_logger::LevelLogger;

impl log::Log for LevelLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let caller = record.file().zip(record.line());
        self.write(
            Level::from(record.level()),
            &record.args().to_string(),
            caller,
        );
    }

    fn flush(&self) {
        let _ = LevelLogger::flush(self);
    }
}

/// Install `logger` as the process-wide `log` backend
///
/// Fails if a backend is already installed.
pub fn install(logger: &'static LevelLogger) -> Result<(), SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Install the shared logger as the `log` backend
pub fn install_global() -> Result<(), SetLoggerError> {
    install(global())
}
