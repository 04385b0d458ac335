//! Display model for running containers.

use serde::Serialize;

/// Number of id characters shown when a container has no name.
const SHORT_ID_LEN: usize = 12;

/// One exposed container port and its optional host-side mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortBinding {
    /// Port inside the container.
    pub private_port: u16,
    /// Port published on the host, if any.
    pub public_port: Option<u16>,
    /// Transport protocol as reported by the runtime ("tcp", "udp", ...).
    pub protocol: String,
    /// Host address the port is bound to.
    pub host_ip: Option<String>,
}

impl PortBinding {
    /// Badge text in the form `"<PROTOCOL> <public|->:<private>"`.
    #[must_use]
    pub fn label(&self) -> String {
        let public = self
            .public_port
            .map_or_else(|| "-".to_string(), |port| port.to_string());
        format!(
            "{} {}:{}",
            self.protocol.to_uppercase(),
            public,
            self.private_port
        )
    }
}

/// A running container, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerRow {
    /// Runtime-assigned identifier.
    pub id: String,
    /// Human-readable name, never empty.
    pub display_name: String,
    /// Image reference the container was started from.
    pub image: String,
    /// Status text as reported by the runtime (e.g. "Up 2 minutes").
    pub status_text: String,
    /// Lifecycle state (e.g. "running").
    pub lifecycle_state: Option<String>,
    /// Exposed ports in runtime order.
    pub ports: Vec<PortBinding>,
    /// Browsable address derived from the first published port.
    pub reachable_url: Option<String>,
}

/// Pick a display name from the runtime's name aliases.
///
/// Uses the first alias with one leading `/` removed, falling back to the
/// first 12 characters of `id` when there is no usable alias.
#[must_use]
pub fn display_name(names: &[String], id: &str) -> String {
    names
        .first()
        .map(|name| name.strip_prefix('/').unwrap_or(name))
        .filter(|name| !name.is_empty())
        .map_or_else(|| id.chars().take(SHORT_ID_LEN).collect(), str::to_string)
}
