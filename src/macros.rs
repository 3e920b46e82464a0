//! Logging macros with automatic call-site capture
//!
//! The macros take the logger as their first argument and format the
//! message like `format!`. Unlike the plain methods, they also record the
//! enclosing module path under the `function` key (when caller capture is
//! enabled on the logger).
//!
//! There is no `panic!` macro (it would shadow `std::panic!`); use
//! [`Logger::panic`](crate::logger::Logger::panic) instead.
//!
//! # Examples
//!
//! ```
//! use xutil::logger::{Level, Logger, Options};
//! use xutil::info;
//!
//! let logger = Logger::new(Vec::<u8>::new(), Level::Debug, Options::new());
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            format!($($arg)+),
            ::std::vec::Vec::new(),
            $crate::logger::CallSite {
                file: file!(),
                line: line!(),
                function: Some(module_path!()),
            },
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logger::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logger::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logger::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logger::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logger::Level::Fatal, $($arg)+)
    };
}
