//! Output sinks for log lines

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared in-memory buffer that collects written lines
///
/// Clones share the same storage, so a buffer handed to a logger can be
/// inspected from the outside.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer contents as (lossy) UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Buffer contents split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

/// Where a writer sends complete lines
#[derive(Debug, Clone)]
pub enum Sink {
    /// Process standard output
    Stdout,
    /// Process standard error
    Stderr,
    /// An open log file, shared between writers
    File(Arc<Mutex<File>>),
    /// In-memory capture
    Memory(MemoryBuffer),
}

impl Sink {
    /// Wrap an open file
    pub fn file(file: File) -> Self {
        Sink::File(Arc::new(Mutex::new(file)))
    }

    /// Create a memory sink and return it alongside its buffer
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        (Sink::Memory(buffer.clone()), buffer)
    }

    /// Short name of the sink kind
    pub fn kind(&self) -> &'static str {
        match self {
            Sink::Stdout => "stdout",
            Sink::Stderr => "stderr",
            Sink::File(_) => "file",
            Sink::Memory(_) => "memory",
        }
    }

    /// Write one complete line in a single call
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let bytes = line.as_bytes();
        match self {
            Sink::Stdout => io::stdout().lock().write_all(bytes),
            Sink::Stderr => io::stderr().lock().write_all(bytes),
            Sink::File(file) => {
                let mut file = file.lock();
                file.write_all(bytes)?;
                file.flush()
            }
            Sink::Memory(buffer) => {
                buffer.bytes.lock().extend_from_slice(bytes);
                Ok(())
            }
        }
    }

    /// Flush any pending output
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().flush(),
            Sink::Stderr => io::stderr().flush(),
            Sink::File(file) => file.lock().flush(),
            Sink::Memory(_) => Ok(()),
        }
    }
}
