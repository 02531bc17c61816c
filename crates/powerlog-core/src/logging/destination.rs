//! Default log destination
//!
//! Every level call writes one line here, whether or not file output is
//! enabled. `set_output` swaps the sink in place, which is how a logger is
//! redirected to its log file.

use parking_lot::Mutex;

use super::handle::LineFormat;
use super::level::Level;
use super::sink::Sink;

/// Redirectable writer shared by all levels of one logger
///
/// Lines look like `<timestamp> <file>:<line>: <PREFIX><message>`.
#[derive(Debug)]
pub struct Destination {
    sink: Mutex<Sink>,
    format: LineFormat,
}

impl Default for Destination {
    fn default() -> Self {
        Self::new(Sink::Stderr, LineFormat::WITH_CALLER)
    }
}

impl Destination {
    pub fn new(sink: Sink, format: LineFormat) -> Self {
        Self {
            sink: Mutex::new(sink),
            format,
        }
    }

    /// Point all subsequent lines at `sink`, returning the previous one
    pub fn set_output(&self, sink: Sink) -> Sink {
        std::mem::replace(&mut *self.sink.lock(), sink)
    }

    /// Current sink
    pub fn sink(&self) -> Sink {
        self.sink.lock().clone()
    }

    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Write one prefixed line; write failures are dropped
    pub fn print(&self, level: Level, message: &str, caller: Option<(&str, u32)>) {
        let line = format!("{}{}{}\n", self.format.header(caller), level.prefix(), message);
        // Hold the lock across the write so a concurrent redirect can't split it
        let sink = self.sink.lock();
        let _ = sink.write_line(&line);
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.sink.lock().flush()
    }
}
