//! Ephemeral port probing

use super::{NetUtilError, Result};
use std::net::{Ipv4Addr, TcpListener};

/// Ask the OS for a currently free TCP port by binding a listener to port
/// 0 and reading back the assigned port. The listener is released before
/// returning.
///
/// The probe is inherently racy: another process may claim the port
/// between release and the caller's own bind. That window cannot be
/// closed by this API; treat the result as a best-effort hint and handle
/// bind failures at the point of use.
pub fn available_port() -> Result<u16> {
    let listener =
        TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(NetUtilError::PortProbe)?;
    let port = listener
        .local_addr()
        .map_err(NetUtilError::PortProbe)?
        .port();
    drop(listener);
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_in_valid_range() {
        let port = available_port().unwrap();
        assert!(port >= 1);
    }

    #[test]
    fn test_repeated_probes_release_listeners() {
        // Each probe must close its listener before returning; leaked
        // listeners would exhaust the ephemeral range over enough calls.
        for _ in 0..64 {
            let port = available_port().unwrap();
            assert!(port >= 1);
        }
    }

    #[test]
    fn test_probed_port_is_bindable_immediately() {
        // Best-effort only, but immediately after the probe the port
        // should normally still be free.
        let port = available_port().unwrap();
        assert!(TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).is_ok());
    }
}
