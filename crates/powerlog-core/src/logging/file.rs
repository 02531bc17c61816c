//! Dated log files
//!
//! Log files are named `<YYYY-MM-DD>_<name>.log` after the local date and
//! are only ever appended to.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::error::{LogError, LogResult};

/// Date layout used in log file names
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unix permission bits for newly created log files
pub const LOG_FILE_MODE: u32 = 0o644;

/// File name for `log_name` on `date`
pub fn log_file_name(log_name: &str, date: NaiveDate) -> String {
    format!("{}_{}.log", date.format(FILE_DATE_FORMAT), log_name)
}

/// Path of today's log file for `log_name` inside `log_dir`
pub fn log_file_path(log_name: &str, log_dir: impl AsRef<Path>) -> PathBuf {
    log_dir
        .as_ref()
        .join(log_file_name(log_name, Local::now().date_naive()))
}

/// Open (creating if needed) a log file for appending
///
/// The directory is not created; a missing directory is reported as
/// [`LogError::Io`].
pub fn open_log_file(path: &Path) -> LogResult<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true).read(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }

    options.open(path).map_err(|e| LogError::io(path, e))
}
