//! Per-level logger handles

use chrono::Local;

use super::level::Level;
use super::sink::Sink;

/// Timestamp layout stamped on every line: `2024/01/02 15:04:05`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Header fields a writer puts in front of each message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    /// Local date and time
    pub timestamp: bool,
    /// Short source file name and line of the call site
    pub caller: bool,
}

impl LineFormat {
    /// Date and time only (per-level handles)
    pub const STANDARD: LineFormat = LineFormat {
        timestamp: true,
        caller: false,
    };

    /// Date, time and call site (the default destination)
    pub const WITH_CALLER: LineFormat = LineFormat {
        timestamp: true,
        caller: true,
    };

    /// Bare message
    pub const BARE: LineFormat = LineFormat {
        timestamp: false,
        caller: false,
    };

    /// Render the header, including its trailing space when non-empty
    pub(crate) fn header(&self, caller: Option<(&str, u32)>) -> String {
        let mut header = String::new();
        if self.timestamp {
            header.push_str(&Local::now().format(TIMESTAMP_FORMAT).to_string());
            header.push(' ');
        }
        if self.caller {
            if let Some((file, line)) = caller {
                header.push_str(&format!("{}:{}: ", short_file(file), line));
            }
        }
        header
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Final path component of a source file
fn short_file(file: &str) -> &str {
    file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file)
}

/// A named writer bound to one severity level
///
/// Every line is `<prefix><timestamp> <message>`.
#[derive(Debug, Clone)]
pub struct LevelHandle {
    level: Level,
    sink: Sink,
    format: LineFormat,
}

impl LevelHandle {
    /// Create a handle with the standard line format
    pub fn new(level: Level, sink: Sink) -> Self {
        Self::with_format(level, sink, LineFormat::STANDARD)
    }

    /// Create a handle with a custom line format
    pub fn with_format(level: Level, sink: Sink, format: LineFormat) -> Self {
        Self {
            level,
            sink,
            format,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn prefix(&self) -> &'static str {
        self.level.prefix()
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Write one line; write failures are dropped
    pub fn println(&self, message: &str) {
        let line = format!("{}{}{}\n", self.prefix(), self.format.header(None), message);
        let _ = self.sink.write_line(&line);
    }
}
