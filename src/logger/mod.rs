//! Structured JSON logging facade
//!
//! Records are line-delimited JSON objects with fixed keys (`time`,
//! `logger`, `level`, `caller`, `message`, `function`, `stacktrace`) plus
//! caller-supplied fields. A logger fans each record out to one or more
//! sinks, each gated by its own level enabler.

pub mod core;
pub mod field;
pub mod global;
pub mod level;
#[allow(clippy::module_inception)]
pub mod logger;
pub mod options;
pub mod record;

pub use core::{Branch, Enabler, EnablerFn};
pub use field::Field;
pub use global::{global, replace_global};
pub use level::Level;
pub use logger::{CallSite, Logger};
pub use options::{Hook, Options};
pub use record::{Record, TIME_FORMAT};
