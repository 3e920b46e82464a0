//! Constructor options for loggers
//!
//! Each option toggles one orthogonal behavior; all are optional and
//! combine freely.

use super::field::Field;
use super::level::Level;
use super::record::Record;
use std::sync::Arc;

/// Callback invoked once per emitted record.
pub type Hook = Arc<dyn Fn(&Record) + Send + Sync>;

/// Optional logger configuration, built by method chaining.
///
/// ```
/// use xutil::logger::{Level, Options};
///
/// let opts = Options::new()
///     .caller(true)
///     .stacktrace_from(Level::Error)
///     .name("gateway");
/// ```
#[derive(Default)]
pub struct Options {
    pub(crate) caller: bool,
    pub(crate) stacktrace_from: Option<Level>,
    pub(crate) fields: Vec<Field>,
    pub(crate) hooks: Vec<Hook>,
    pub(crate) name: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate every record with the call site as `file:line`.
    #[must_use]
    pub fn caller(mut self, enabled: bool) -> Self {
        self.caller = enabled;
        self
    }

    /// Capture a stack trace into records at or above `level`.
    #[must_use]
    pub fn stacktrace_from(mut self, level: Level) -> Self {
        self.stacktrace_from = Some(level);
        self
    }

    /// Extra fields appended to every record.
    #[must_use]
    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Register a callback fired once per emitted record.
    #[must_use]
    pub fn hook(mut self, hook: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Value for the record's `logger` key.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::field;

    #[test]
    fn test_options_chain() {
        let opts = Options::new()
            .caller(true)
            .stacktrace_from(Level::Warn)
            .fields(vec![field::string("service", "api")])
            .name("api");

        assert!(opts.caller);
        assert_eq!(opts.stacktrace_from, Some(Level::Warn));
        assert_eq!(opts.fields.len(), 1);
        assert_eq!(opts.name.as_deref(), Some("api"));
    }

    #[test]
    fn test_options_default() {
        let opts = Options::new();
        assert!(!opts.caller);
        assert!(opts.stacktrace_from.is_none());
        assert!(opts.fields.is_empty());
        assert!(opts.hooks.is_empty());
        assert!(opts.name.is_none());
    }
}
