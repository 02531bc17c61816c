//! Leveled logging
//!
//! - `LevelLogger`: per-level handles plus a redirectable destination
//! - `Logger`: trait seam for host code that takes any logger
//! - `global()`: shared instance behind the `*_log!` macros
//! - `install()`: use a `LevelLogger` as the `log` crate backend

mod traits;
mod level;
mod error;
mod sink;
mod handle;
mod destination;
mod level_logger;
mod facade;
pub mod file;
pub mod global;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger, join_values, concat_values};
pub use level::Level;
pub use error::{LogError, LogResult};
pub use sink::{Sink, MemoryBuffer};
pub use handle::{LevelHandle, LineFormat, TIMESTAMP_FORMAT};
pub use destination::Destination;
pub use level_logger::LevelLogger;
pub use facade::{install, install_global};

// Re-export file helpers for convenience
pub use file::{log_file_name, log_file_path, open_log_file};
pub use global::{global, set_logger_file};
