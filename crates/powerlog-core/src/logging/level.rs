//! Severity levels

/// Log levels
///
/// `Panic` is not backed by its own handle: it writes through the error
/// handle and carries its own prefix on the destination line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Panic = 4,
}

impl Level {
    /// All levels, lowest first
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
    ];

    /// Upper-case name of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
        }
    }

    /// Line prefix: the level name followed by a colon and a space
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG: ",
            Level::Info => "INFO: ",
            Level::Warn => "WARN: ",
            Level::Error => "ERROR: ",
            Level::Panic => "PANIC: ",
        }
    }

    /// Level whose handle receives lines for this level
    pub fn handle_level(&self) -> Level {
        match self {
            Level::Panic => Level::Error,
            other => *other,
        }
    }

    /// Whether the default handle for this level writes to stderr
    pub fn is_stderr(&self) -> bool {
        matches!(self, Level::Error | Level::Panic)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}
