//! Process-wide logger slot
//!
//! At most one global logger is current at a time; constructing a logger
//! through [`Logger::new`](super::Logger::new) or
//! [`Logger::new_tree`](super::Logger::new_tree) atomically supersedes the
//! previous one. Prefer passing the returned handle through the call
//! graph; the global slot is a convenience for the outermost boundary.

use super::core::{Core, Enabler};
use super::level::Level;
use super::logger::Logger;
use super::options::Options;
use parking_lot::RwLock;
use std::io;
use std::mem;
use std::sync::{Arc, OnceLock};

static SLOT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    SLOT.get_or_init(|| RwLock::new(default_logger()))
}

/// Out-of-the-box logger installed before any explicit configuration:
/// stdout sink, debug threshold, caller capture, stack traces from debug up.
fn default_logger() -> Arc<Logger> {
    Logger::assemble(
        vec![Core::new(
            Box::new(io::stdout()),
            Enabler::Threshold(Level::Debug),
        )],
        Options::new().caller(true).stacktrace_from(Level::Debug),
    )
}

/// The current process-wide logger.
pub fn global() -> Arc<Logger> {
    slot().read().clone()
}

/// Install `logger` as the process-wide logger, returning the previous one.
pub fn replace_global(logger: Arc<Logger>) -> Arc<Logger> {
    mem::replace(&mut *slot().write(), logger)
}
