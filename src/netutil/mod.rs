//! Network helper functions
//!
//! Local IPv4 discovery, private-address classification, and ephemeral
//! port probing. Independent of the logging facade.

pub mod ip;
pub mod port;

pub use ip::{is_intranet_ipv4, local_ipv4, local_ipv4_with, Ipv4Classifier, Scope};
pub use port::available_port;

pub type Result<T> = std::result::Result<T, NetUtilError>;

#[derive(Debug, thiserror::Error)]
pub enum NetUtilError {
    /// Network interface enumeration failed.
    #[error("failed to enumerate network interfaces: {0}")]
    Enumerate(#[source] std::io::Error),

    /// The ephemeral port probe could not bind a listener.
    #[error("failed to probe for an ephemeral port: {0}")]
    PortProbe(#[source] std::io::Error),
}
