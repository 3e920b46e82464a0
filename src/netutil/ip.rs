//! Local IPv4 discovery and private-address classification

use super::{NetUtilError, Result};
use ipnet::Ipv4Net;
use std::net::{IpAddr, Ipv4Addr};

/// The four well-known reserved IPv4 ranges, in classification order.
pub const DEFAULT_PRIVATE_BLOCKS: [Ipv4Net; 4] = [
    // 10.0.0.0 to 10.255.255.255
    Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8),
    // 172.16.0.0 to 172.31.255.255
    Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12),
    // 192.168.0.0 to 192.168.255.255
    Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16),
    // 169.254.0.0 to 169.254.255.255 (link-local)
    Ipv4Net::new_assert(Ipv4Addr::new(169, 254, 0, 0), 16),
];

/// Classifies IPv4 addresses as private (intranet) or public by CIDR
/// containment against an ordered block list.
///
/// A classifier is an immutable value: altering the block set derives a
/// new classifier via [`map_blocks`](Ipv4Classifier::map_blocks) rather
/// than mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Classifier {
    blocks: Vec<Ipv4Net>,
}

impl Default for Ipv4Classifier {
    fn default() -> Self {
        Self {
            blocks: DEFAULT_PRIVATE_BLOCKS.to_vec(),
        }
    }
}

impl Ipv4Classifier {
    /// Classifier over [`DEFAULT_PRIVATE_BLOCKS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier over an explicit block list.
    pub fn with_blocks(blocks: Vec<Ipv4Net>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Ipv4Net] {
        &self.blocks
    }

    /// Derive a new classifier by transforming a copy of the current block
    /// list. The receiver is left untouched.
    #[must_use]
    pub fn map_blocks(&self, transform: impl FnOnce(Vec<Ipv4Net>) -> Vec<Ipv4Net>) -> Self {
        Self {
            blocks: transform(self.blocks.clone()),
        }
    }

    /// Containment test against every block, true on first match.
    pub fn is_private(&self, addr: Ipv4Addr) -> bool {
        self.blocks.iter().any(|block| block.contains(&addr))
    }

    /// String convenience: parses `addr` as an IPv4 address. Non-IPv4
    /// input (including IPv6) classifies as not private, never an error.
    pub fn is_private_str(&self, addr: &str) -> bool {
        addr.parse::<Ipv4Addr>()
            .map(|addr| self.is_private(addr))
            .unwrap_or(false)
    }
}

/// Whether `addr` falls inside the default reserved ranges.
///
/// Parse failures and non-IPv4 input yield `false`.
pub fn is_intranet_ipv4(addr: &str) -> bool {
    Ipv4Classifier::default().is_private_str(addr)
}

/// Which side of the intranet/extranet split a discovered address must be
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Addresses inside the private ranges.
    Intranet,
    /// Addresses outside the private ranges.
    Extranet,
}

impl Scope {
    fn matches(self, private: bool) -> bool {
        match self {
            Scope::Intranet => private,
            Scope::Extranet => !private,
        }
    }
}

/// First local IPv4 address matching `scope`, classified against the
/// default private ranges. See [`local_ipv4_with`].
pub fn local_ipv4(scope: Scope) -> Result<Option<Ipv4Addr>> {
    local_ipv4_with(scope, &Ipv4Classifier::default())
}

/// Enumerates the host's interfaces and returns the first non-loopback
/// IPv4 address whose classification matches `scope`.
///
/// Iteration follows the OS enumeration order of the interface list; it is
/// not sorted and not guaranteed stable across platforms. Returns
/// `Ok(None)` when no address qualifies and `Err` when enumeration itself
/// fails; the two outcomes are deliberately distinct.
pub fn local_ipv4_with(scope: Scope, classifier: &Ipv4Classifier) -> Result<Option<Ipv4Addr>> {
    let interfaces = if_addrs::get_if_addrs().map_err(NetUtilError::Enumerate)?;

    for interface in interfaces {
        if interface.is_loopback() || interface.name.starts_with("lo") {
            continue;
        }
        let IpAddr::V4(addr) = interface.ip() else {
            continue;
        };
        // Guard against misconfigured interfaces reporting the loopback
        // address without the loopback flag.
        if addr == Ipv4Addr::LOCALHOST {
            continue;
        }
        if scope.matches(classifier.is_private(addr)) {
            return Ok(Some(addr));
        }
    }

    Ok(None)
}
