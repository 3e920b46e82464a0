//! Output cores: one byte sink gated by one level enabler
//!
//! A logger fans each record out to its cores; every core decides
//! independently whether the record's level is enabled for its sink.

use super::level::Level;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Boxed level predicate.
pub type EnablerFn = Box<dyn Fn(Level) -> bool + Send + Sync>;

/// Decides whether a record at a given level is written to a core's sink.
pub enum Enabler {
    /// Enabled at or above a minimum level.
    Threshold(Level),
    /// Arbitrary predicate over the level.
    Predicate(EnablerFn),
}

impl Enabler {
    /// Enabled at or above `level`. Same as `Enabler::Threshold`.
    pub fn at_least(level: Level) -> Self {
        Enabler::Threshold(level)
    }

    /// Enabled at or below `level`.
    pub fn at_most(level: Level) -> Self {
        Enabler::Predicate(Box::new(move |l| l <= level))
    }

    pub fn predicate(f: impl Fn(Level) -> bool + Send + Sync + 'static) -> Self {
        Enabler::Predicate(Box::new(f))
    }

    pub fn enabled(&self, level: Level) -> bool {
        match self {
            Enabler::Threshold(min) => level >= *min,
            Enabler::Predicate(f) => f(level),
        }
    }
}

impl From<Level> for Enabler {
    fn from(level: Level) -> Self {
        Enabler::Threshold(level)
    }
}

impl std::fmt::Debug for Enabler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Enabler::Threshold(min) => f.debug_tuple("Threshold").field(min).finish(),
            Enabler::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A sink plus its enabler, as supplied to `Logger::new_tree`.
pub struct Branch {
    pub sink: Box<dyn Write + Send>,
    pub enabler: Enabler,
}

impl Branch {
    pub fn new(sink: impl Write + Send + 'static, enabler: impl Into<Enabler>) -> Self {
        Self {
            sink: Box::new(sink),
            enabler: enabler.into(),
        }
    }
}

/// One output destination owned by a logger.
pub(crate) struct Core {
    sink: Mutex<Box<dyn Write + Send>>,
    enabler: Enabler,
}

impl Core {
    pub(crate) fn new(sink: Box<dyn Write + Send>, enabler: Enabler) -> Self {
        Self {
            sink: Mutex::new(sink),
            enabler,
        }
    }

    pub(crate) fn enabled(&self, level: Level) -> bool {
        self.enabler.enabled(level)
    }

    /// Write one encoded record line, newline-terminated, and flush.
    pub(crate) fn write_line(&self, line: &str) -> io::Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()
    }

    pub(crate) fn flush(&self) -> io::Result<()> {
        self.sink.lock().flush()
    }
}

impl From<Branch> for Core {
    fn from(branch: Branch) -> Self {
        Core::new(branch.sink, branch.enabler)
    }
}
