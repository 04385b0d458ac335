//! Runtime client abstraction.

use async_trait::async_trait;
use dockboard_core::Result;

/// A container record as reported by the runtime, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContainer {
    /// Runtime-assigned identifier.
    pub id: Option<String>,
    /// Name aliases, usually prefixed with `/`.
    pub names: Vec<String>,
    /// Image reference.
    pub image: Option<String>,
    /// Human-readable status (e.g. "Up 2 minutes").
    pub status: Option<String>,
    /// Lifecycle state (e.g. "running").
    pub state: Option<String>,
    /// Exposed ports in runtime order.
    pub ports: Vec<RawPort>,
}

/// A port entry as reported by the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPort {
    /// Port inside the container.
    pub private_port: u16,
    /// Port published on the host.
    pub public_port: Option<u16>,
    /// Transport protocol.
    pub protocol: String,
    /// Host address.
    pub ip: Option<String>,
}

/// Client for the container runtime.
///
/// Only listing is needed; implementations map every client failure to
/// [`dockboard_core::Error::RuntimeUnavailable`].
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// List containers that are currently running.
    async fn list_running(&self) -> Result<Vec<RawContainer>>;
}
