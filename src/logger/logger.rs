//! Main logger implementation

use super::core::{Branch, Core, Enabler};
use super::field::Field;
use super::global;
use super::level::Level;
use super::options::{Hook, Options};
use super::record::Record;
use std::backtrace::Backtrace;
use std::io::Write;
use std::panic::Location;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Call-site information attached to a record.
///
/// The logging macros fill `function` from `module_path!()`; direct method
/// calls only carry `file:line` (via `#[track_caller]`).
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: Option<&'static str>,
}

impl CallSite {
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            function: None,
        }
    }
}

/// A structured JSON logger fanning records out to one or more cores.
///
/// Constructed by [`Logger::new`] or [`Logger::new_tree`]; both install the
/// result as the process-wide global logger as a side effect. Construction
/// never fails: a broken sink surfaces only at write time, and those
/// failures are swallowed (fire-and-forget) but counted in
/// [`Logger::failed_write_count`].
///
/// Records at [`Level::Panic`] raise a runtime panic after being emitted;
/// records at [`Level::Fatal`] terminate the process with exit code 1.
pub struct Logger {
    name: Option<String>,
    cores: Arc<Vec<Core>>,
    capture_caller: bool,
    stacktrace_from: Option<Level>,
    bound: Vec<Field>,
    hooks: Vec<Hook>,
    failed_writes: Arc<AtomicU64>,
}

impl Logger {
    /// Build a single-core logger writing JSON records to `sink`, keeping
    /// records at or above `min_level`, and install it as the process-wide
    /// global logger.
    pub fn new(sink: impl Write + Send + 'static, min_level: Level, opts: Options) -> Arc<Self> {
        let cores = vec![Core::new(Box::new(sink), Enabler::Threshold(min_level))];
        let logger = Self::assemble(cores, opts);
        global::replace_global(Arc::clone(&logger));
        logger
    }

    /// Build a multi-core logger, one core per branch, and install it as
    /// the process-wide global logger.
    ///
    /// Each branch pairs a sink with its own enabler, so one record can be
    /// routed to some sinks and suppressed at others. Overlapping and
    /// non-overlapping routing are both at the caller's discretion.
    pub fn new_tree(branches: Vec<Branch>, opts: Options) -> Arc<Self> {
        let cores = branches.into_iter().map(Core::from).collect();
        let logger = Self::assemble(cores, opts);
        global::replace_global(Arc::clone(&logger));
        logger
    }

    /// Assemble a logger without touching the global slot.
    pub(crate) fn assemble(cores: Vec<Core>, opts: Options) -> Arc<Self> {
        Arc::new(Self {
            name: opts.name,
            cores: Arc::new(cores),
            capture_caller: opts.caller,
            stacktrace_from: opts.stacktrace_from,
            bound: opts.fields,
            hooks: opts.hooks,
            failed_writes: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Whether any core would accept a record at `level`.
    pub fn enabled(&self, level: Level) -> bool {
        self.cores.iter().any(|core| core.enabled(level))
    }

    /// Derive a child logger sharing this logger's cores, with extra
    /// fields bound to every record. The child is not installed globally.
    #[must_use]
    pub fn with_fields(&self, fields: Vec<Field>) -> Logger {
        let mut bound = self.bound.clone();
        bound.extend(fields);
        Logger {
            name: self.name.clone(),
            cores: Arc::clone(&self.cores),
            capture_caller: self.capture_caller,
            stacktrace_from: self.stacktrace_from,
            bound,
            hooks: self.hooks.clone(),
            failed_writes: Arc::clone(&self.failed_writes),
        }
    }

    /// Log a message with structured fields.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>, fields: Vec<Field>) {
        self.log_at(level, message, fields, CallSite::caller());
    }

    /// Log with an explicit call site. This is the entry point used by the
    /// logging macros, which capture `file!/line!/module_path!`.
    pub fn log_at(
        &self,
        level: Level,
        message: impl Into<String>,
        fields: Vec<Field>,
        site: CallSite,
    ) {
        let message = message.into();
        self.emit(level, &message, &fields, site);

        // Terminal levels abort regardless of whether any core accepted
        // the record.
        match level {
            Level::Panic => panic!("{}", message),
            Level::Fatal => process::exit(1),
            _ => {}
        }
    }

    fn emit(&self, level: Level, message: &str, fields: &[Field], site: CallSite) {
        if !self.enabled(level) {
            return;
        }

        let mut record = Record::new(level, message);
        if let Some(ref name) = self.name {
            record = record.with_logger(name.clone());
        }
        if self.capture_caller {
            record = record.with_caller(site.file, site.line);
            if let Some(function) = site.function {
                record = record.with_function(function);
            }
        }
        if self.stacktrace_from.is_some_and(|min| level >= min) {
            record = record.with_stacktrace(Backtrace::force_capture().to_string());
        }
        record = record.with_fields(&self.bound).with_fields(fields);

        let line = match record.to_json() {
            Ok(line) => line,
            Err(_) => {
                self.failed_writes.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        for core in self.cores.iter() {
            if core.enabled(level) && core.write_line(&line).is_err() {
                self.failed_writes.fetch_add(1, Ordering::Relaxed);
            }
        }

        for hook in &self.hooks {
            hook(&record);
        }
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message, Vec::new());
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message, Vec::new());
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message, Vec::new());
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message, Vec::new());
    }

    /// Emit at panic level, then panic with the message.
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>) {
        self.log(Level::Panic, message, Vec::new());
    }

    /// Emit at fatal level, then terminate the process with exit code 1.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message, Vec::new());
    }

    /// Records dropped due to encode or sink write failures.
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Flush every core's sink.
    pub fn flush(&self) {
        for core in self.cores.iter() {
            if core.flush().is_err() {
                self.failed_writes.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
