//! Reachable-URL derivation.

use crate::PortBinding;

/// Host segment used when no host is configured.
///
/// Unset hosts are not rejected; the link keeps this placeholder so the
/// misconfiguration stays visible on the page.
pub const UNSET_HOST_PLACEHOLDER: &str = "undefined";

/// Build a browsable URL from the first published port.
///
/// The scheme is always `http`, including for `udp` bindings. Returns `None`
/// when no binding has a public port.
#[must_use]
pub fn derive_url(ports: &[PortBinding], host: Option<&str>) -> Option<String> {
    let public_port = ports.iter().find_map(|binding| binding.public_port)?;
    let host = host.unwrap_or(UNSET_HOST_PLACEHOLDER);
    Some(format!("http://{host}:{public_port}"))
}
