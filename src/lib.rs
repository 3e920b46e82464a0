//! # xutil
//!
//! Two small, independent utility modules:
//!
//! - [`logger`]: a structured JSON logging facade. Single-sink and
//!   multi-sink ("tree") constructors, per-sink level enablers, fixed
//!   record keys, and a process-wide global logger slot with a sensible
//!   out-of-the-box default.
//! - [`netutil`]: network helpers. Local IPv4 discovery with
//!   intranet/extranet filtering, private-address classification over
//!   CIDR blocks, and ephemeral TCP port probing.
//!
//! ## Quick start
//!
//! ```
//! use xutil::logger::{field, Branch, Enabler, Level, Logger, Options};
//!
//! // Route errors to one sink, everything up to warn to another.
//! let logger = Logger::new_tree(
//!     vec![
//!         Branch::new(Vec::<u8>::new(), Enabler::at_least(Level::Error)),
//!         Branch::new(Vec::<u8>::new(), Enabler::at_most(Level::Warn)),
//!     ],
//!     Options::new().caller(true),
//! );
//!
//! logger.log(
//!     Level::Info,
//!     "cache warmed",
//!     vec![field::int64("entries", 1024)],
//! );
//! ```

pub mod logger;
pub mod macros;
pub mod netutil;

pub mod prelude {
    pub use crate::logger::{
        field, global, replace_global, Branch, CallSite, Enabler, Field, Hook, Level, Logger,
        Options, Record,
    };
    pub use crate::netutil::{
        available_port, is_intranet_ipv4, local_ipv4, local_ipv4_with, Ipv4Classifier,
        NetUtilError, Scope,
    };
}

pub use logger::{Branch, Enabler, Field, Level, Logger, Options, Record};
pub use netutil::{available_port, is_intranet_ipv4, local_ipv4, Ipv4Classifier, Scope};
