//! Leveled logger with optional dated log file output

use std::fmt::Display;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use super::destination::Destination;
use super::error::{LogError, LogResult};
use super::file::{log_file_path, open_log_file};
use super::handle::{LevelHandle, LineFormat};
use super::level::Level;
use super::sink::Sink;
use super::traits::{concat_values, join_values, Logger};
use crate::config::LoggerConfig;

/// Leveled logger
///
/// Holds one handle per severity (debug, info and warn on stdout, error on
/// stderr) and a [`Destination`] that starts on stderr. Every call writes a
/// line to the destination. Once [`set_logger_file`](Self::set_logger_file)
/// succeeds the destination points at the log file and the per-level handles
/// start writing too, so each call then produces two lines: one on the
/// handle's stream and one in the file.
///
/// # Example
///
/// ```no_run
/// use powerlog_core::LevelLogger;
///
/// let logger = LevelLogger::new();
/// logger.set_logger_file("server", "/var/log/myapp")?;
/// logger.info(&[&"listening on port", &8080]);
/// # Ok::<(), powerlog_core::LogError>(())
/// ```
#[derive(Debug)]
pub struct LevelLogger {
    debug: LevelHandle,
    info: LevelHandle,
    warn: LevelHandle,
    error: LevelHandle,
    destination: Destination,
    file_output: AtomicBool,
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelLogger {
    /// Create a logger writing to stdout and stderr
    pub fn new() -> Self {
        Self::with_streams(Sink::Stdout, Sink::Stderr)
    }

    /// Create a logger on custom sinks
    ///
    /// Debug, info and warn handles write to `out`; the error handle and the
    /// destination write to `err`.
    pub fn with_streams(out: Sink, err: Sink) -> Self {
        Self::with_formats(out, err, LineFormat::STANDARD, LineFormat::WITH_CALLER)
    }

    fn with_formats(
        out: Sink,
        err: Sink,
        handle_format: LineFormat,
        destination_format: LineFormat,
    ) -> Self {
        let handle = |level: Level| {
            let sink = if level.is_stderr() { err.clone() } else { out.clone() };
            LevelHandle::with_format(level, sink, handle_format)
        };
        Self {
            debug: handle(Level::Debug),
            info: handle(Level::Info),
            warn: handle(Level::Warn),
            error: handle(Level::Error),
            destination: Destination::new(err.clone(), destination_format),
            file_output: AtomicBool::new(false),
        }
    }

    /// Create a logger from a config, opening its log file if one is named
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        let logger = Self::with_formats(
            Sink::Stdout,
            Sink::Stderr,
            config.handle_format(),
            config.destination_format(),
        );
        if let Some(name) = &config.log_name {
            logger.set_logger_file(name, config.log_dir())?;
        }
        Ok(logger)
    }

    /// Handle used for `level` (panic shares the error handle)
    pub fn handle(&self, level: Level) -> &LevelHandle {
        match level.handle_level() {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Error | Level::Panic => &self.error,
        }
    }

    pub fn debug_handle(&self) -> &LevelHandle {
        &self.debug
    }

    pub fn info_handle(&self) -> &LevelHandle {
        &self.info
    }

    pub fn warn_handle(&self) -> &LevelHandle {
        &self.warn
    }

    pub fn error_handle(&self) -> &LevelHandle {
        &self.error
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Whether a log file has been opened
    pub fn is_file_output(&self) -> bool {
        self.file_output.load(Ordering::SeqCst)
    }

    /// Redirect the destination to `<log_dir>/<YYYY-MM-DD>_<log_name>.log`
    ///
    /// The file is created if missing and appended to otherwise; `log_dir`
    /// must already exist. Returns the path that was opened. Per-level
    /// handles keep writing to their original streams.
    pub fn set_logger_file(
        &self,
        log_name: &str,
        log_dir: impl AsRef<Path>,
    ) -> LogResult<PathBuf> {
        if log_name.is_empty() {
            return Err(LogError::missing_log_name());
        }

        let path = log_file_path(log_name, log_dir);
        let file = open_log_file(&path)?;
        self.destination.set_output(Sink::file(file));
        self.file_output.store(true, Ordering::SeqCst);
        Ok(path)
    }

    /// Write `message` at `level` with an explicit call site
    ///
    /// The handle line is only written once file output is on; the
    /// destination line is always written.
    pub fn write(&self, level: Level, message: &str, caller: Option<(&str, u32)>) {
        if self.is_file_output() {
            self.handle(level).println(message);
        }
        self.destination.print(level, message, caller);
    }

    #[track_caller]
    fn write_here(&self, level: Level, values: &[&dyn Display]) {
        let location = Location::caller();
        self.write(
            level,
            &join_values(values),
            Some((location.file(), location.line())),
        );
    }

    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.write_here(Level::Debug, values);
    }

    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.write_here(Level::Info, values);
    }

    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) {
        self.write_here(Level::Warn, values);
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.write_here(Level::Error, values);
    }

    /// Log like [`error`](Self::error), then return a fatal error
    ///
    /// The returned [`LogError::Fatal`] carries the values concatenated
    /// without separators.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> LogError {
        self.write_here(Level::Panic, values);
        LogError::fatal(concat_values(values))
    }

    /// Log like [`error`](Self::error), then panic
    ///
    /// The panic payload is the values concatenated without separators.
    /// Use [`fatal`](Self::fatal) where the caller should decide.
    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) -> ! {
        self.write_here(Level::Panic, values);
        panic!("{}", concat_values(values));
    }

    /// Flush the handles and the destination
    pub fn flush(&self) -> std::io::Result<()> {
        for handle in [&self.debug, &self.info, &self.warn, &self.error] {
            handle.sink().flush()?;
        }
        self.destination.flush()
    }
}

impl Logger for LevelLogger {
    #[track_caller]
    fn debug(&self, values: &[&dyn Display]) {
        LevelLogger::debug(self, values);
    }

    #[track_caller]
    fn info(&self, values: &[&dyn Display]) {
        LevelLogger::info(self, values);
    }

    #[track_caller]
    fn warn(&self, values: &[&dyn Display]) {
        LevelLogger::warn(self, values);
    }

    #[track_caller]
    fn error(&self, values: &[&dyn Display]) {
        LevelLogger::error(self, values);
    }

    #[track_caller]
    fn panic(&self, values: &[&dyn Display]) -> ! {
        LevelLogger::panic(self, values)
    }

    fn set_logger_file(&self, log_name: &str, log_dir: &Path) -> LogResult<PathBuf> {
        LevelLogger::set_logger_file(self, log_name, log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::file::FILE_DATE_FORMAT;
    use crate::logging::sink::MemoryBuffer;
    use crate::logging::traits::SharedLogger;
    use chrono::Local;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    fn captured() -> (LevelLogger, MemoryBuffer, MemoryBuffer) {
        let (out, out_buffer) = Sink::memory();
        let (err, err_buffer) = Sink::memory();
        (LevelLogger::with_streams(out, err), out_buffer, err_buffer)
    }

    fn today_file(name: &str) -> String {
        format!("{}_{}.log", Local::now().format(FILE_DATE_FORMAT), name)
    }

    #[test]
    fn test_new_populates_handles() {
        let logger = LevelLogger::new();

        assert_eq!(logger.debug_handle().prefix(), "DEBUG: ");
        assert_eq!(logger.info_handle().prefix(), "INFO: ");
        assert_eq!(logger.warn_handle().prefix(), "WARN: ");
        assert_eq!(logger.error_handle().prefix(), "ERROR: ");

        assert_eq!(logger.debug_handle().sink().kind(), "stdout");
        assert_eq!(logger.info_handle().sink().kind(), "stdout");
        assert_eq!(logger.warn_handle().sink().kind(), "stdout");
        assert_eq!(logger.error_handle().sink().kind(), "stderr");

        assert!(logger.debug_handle().format().timestamp);
        assert!(!logger.is_file_output());
    }

    #[test]
    fn test_handle_lookup() {
        let logger = LevelLogger::new();
        for level in Level::ALL {
            assert_eq!(logger.handle(level).level(), level.handle_level());
        }
    }

    #[test]
    fn test_levels_write_destination_only_without_file() {
        let (logger, out, err) = captured();

        logger.debug(&[&"test"]);
        logger.info(&[&"test"]);
        logger.warn(&[&"test"]);
        logger.error(&[&"test"]);

        assert!(out.is_empty());
        let lines = err.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("DEBUG: test"));
        assert!(lines[1].ends_with("INFO: test"));
        assert!(lines[2].ends_with("WARN: test"));
        assert!(lines[3].ends_with("ERROR: test"));
    }

    #[test]
    fn test_destination_line_has_call_site() {
        let (logger, _out, err) = captured();

        logger.info(&[&"hello", &42]);
        let line = err.contents();
        assert!(line.contains("level_logger.rs:"), "line was {line:?}");
        assert!(line.ends_with("INFO: hello 42\n"));
    }

    #[test]
    fn test_set_logger_file_empty_name() {
        let (logger, _out, _err) = captured();

        let err = logger.set_logger_file("", "/invalid/tmp").unwrap_err();
        assert!(err.is_config());
        assert_eq!(err.to_string(), "log name is required");
        assert!(!logger.is_file_output());
    }

    #[test]
    fn test_set_logger_file_missing_dir() {
        let (logger, _out, _err) = captured();

        let err = logger.set_logger_file("run1", "/nonexistent/dir").unwrap_err();
        let message = err.to_string();
        let expected_path = format!("/nonexistent/dir/{}", today_file("run1"));

        assert!(matches!(err, LogError::Io { .. }));
        assert!(message.starts_with("error creating log file: "));
        assert!(message.contains(&expected_path), "message was {message:?}");
        assert!(message.to_lowercase().contains("no such file or directory"));
        assert!(!logger.is_file_output());
    }

    #[test]
    fn test_set_logger_file_success() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, _out, _err) = captured();

        let path = logger.set_logger_file("run1", dir.path()).unwrap();

        assert_eq!(path, dir.path().join(today_file("run1")));
        assert!(path.exists());
        assert!(logger.is_file_output());
        assert_eq!(logger.destination().sink().kind(), "file");
    }

    #[test]
    fn test_info_after_file_goes_to_file_and_handle() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, out, err) = captured();

        let path = logger.set_logger_file("run1", dir.path()).unwrap();
        logger.info(&[&"hello"]);
        logger.error(&[&"failed", &"twice"]);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO:") && lines[0].contains("hello"));
        assert!(lines[1].ends_with("ERROR: failed twice"));

        // Handles stay on their original streams
        assert_eq!(out.lines().len(), 1);
        assert!(out.contents().starts_with("INFO: "));
        assert!(out.contents().ends_with(" hello\n"));
        assert_eq!(err.lines().len(), 1);
        assert!(err.contents().starts_with("ERROR: "));
    }

    #[test]
    fn test_file_output_never_reverts() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, _out, _err) = captured();

        logger.set_logger_file("run1", dir.path()).unwrap();
        assert!(logger.set_logger_file("", dir.path()).is_err());
        assert!(logger.set_logger_file("run1", "/nonexistent/dir").is_err());
        assert!(logger.is_file_output());
    }

    #[test]
    fn test_set_logger_file_twice() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, _out, _err) = captured();

        let first = logger.set_logger_file("first", dir.path()).unwrap();
        let second = logger.set_logger_file("second", dir.path()).unwrap();
        logger.warn(&[&"after switch"]);

        assert!(first.exists());
        assert!(second.exists());
        assert!(std::fs::read_to_string(&first).unwrap().is_empty());
        assert!(std::fs::read_to_string(&second)
            .unwrap()
            .contains("WARN: after switch"));
    }

    #[test]
    fn test_instances_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let (with_file, _, _) = captured();
        let (plain, plain_out, plain_err) = captured();

        with_file.set_logger_file("independent", dir.path()).unwrap();
        plain.info(&[&"still on stderr"]);

        assert!(!plain.is_file_output());
        assert!(plain_out.is_empty());
        assert!(plain_err.contents().contains("INFO: still on stderr"));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_unwinds() {
        let (logger, _out, _err) = captured();
        logger.panic(&[&"boom"]);
    }

    #[test]
    fn test_panic_is_recoverable_with_catch_unwind() {
        let (logger, _out, err) = captured();

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.panic(&[&"boom"]);
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom"));
        assert!(err.contents().ends_with("PANIC: boom\n"));
    }

    #[test]
    fn test_panic_with_file_writes_error_handle() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, _out, err) = captured();
        let path = logger.set_logger_file("panic", dir.path()).unwrap();

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.panic(&[&"disk ", &"gone"]);
        }));

        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("disk gone")
        );
        assert!(err.contents().starts_with("ERROR: "));
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("PANIC: disk  gone"));
    }

    #[test]
    fn test_fatal_returns_error() {
        let (logger, _out, err) = captured();

        let fatal = logger.fatal(&[&"config ", &"missing"]);
        assert!(matches!(fatal, LogError::Fatal { .. }));
        assert_eq!(fatal.to_string(), "config missing");
        assert!(err.contents().ends_with("PANIC: config  missing\n"));
    }

    #[test]
    fn test_logger_trait_object() {
        let (out, _out_buffer) = Sink::memory();
        let (err, err_buffer) = Sink::memory();
        let logger: SharedLogger = Arc::new(LevelLogger::with_streams(out, err));

        crate::log_warn!(logger, "via", "trait");
        assert!(err_buffer.contents().ends_with("WARN: via trait\n"));
    }

    #[test]
    fn test_shared_logger_redirects_and_panics() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _out_buffer) = Sink::memory();
        let (err, err_buffer) = Sink::memory();
        let logger: SharedLogger = Arc::new(LevelLogger::with_streams(out, err));

        let path = logger.set_logger_file("shared", dir.path()).unwrap();
        assert_eq!(path, dir.path().join(today_file("shared")));
        assert!(logger.set_logger_file("", dir.path()).unwrap_err().is_config());

        let result = catch_unwind(AssertUnwindSafe(|| {
            crate::log_panic!(logger, "shared ", "boom");
        }));
        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("shared boom")
        );
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("PANIC: shared  boom"));
        assert!(err_buffer.contents().starts_with("ERROR: "));
    }

    #[test]
    fn test_panic_concatenates_without_separator() {
        let (logger, _out, _err) = captured();

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.panic(&[&1, &2]);
        }));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("12"));
        assert_eq!(logger.fatal(&[&1, &2]).to_string(), "12");
    }

    #[test]
    fn test_with_streams_routes_by_level() {
        let (out, out_buffer) = Sink::memory();
        let (err, err_buffer) = Sink::memory();
        let logger = LevelLogger::with_streams(out, err);

        for level in Level::ALL {
            let handle = logger.handle(level);
            handle.println("routed");
            let expected = if level.is_stderr() { &err_buffer } else { &out_buffer };
            assert!(expected.contents().ends_with(" routed\n"));
            out_buffer.clear();
            err_buffer.clear();
        }
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig {
            log_name: Some("configured".to_string()),
            log_dir: Some(dir.path().to_path_buf()),
            ..LoggerConfig::default()
        };

        let logger = LevelLogger::from_config(&config).unwrap();
        assert!(logger.is_file_output());
        assert!(dir.path().join(today_file("configured")).exists());

        let plain = LevelLogger::from_config(&LoggerConfig::default()).unwrap();
        assert!(!plain.is_file_output());
    }

    #[test]
    fn test_from_config_empty_name() {
        let config = LoggerConfig {
            log_name: Some(String::new()),
            ..LoggerConfig::default()
        };
        let err = LevelLogger::from_config(&config).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_concurrent_logging_and_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _out_buffer) = Sink::memory();
        let (err, _err_buffer) = Sink::memory();
        let logger = Arc::new(LevelLogger::with_streams(out, err));

        let mut handles = vec![];
        for i in 0..8 {
            let logger = Arc::clone(&logger);
            handles.push(std::thread::spawn(move || {
                for j in 0..50 {
                    logger.info(&[&"thread", &i, &j]);
                }
            }));
        }
        let path = logger.set_logger_file("threads", dir.path()).unwrap();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every line in the file is whole
        let content = std::fs::read_to_string(&path).unwrap();
        for line in content.lines() {
            assert!(line.contains("INFO: thread "), "torn line {line:?}");
        }
    }
}
