//! Docker-backed runtime client.

use async_trait::async_trait;
use bollard::Docker;
use bollard::container::ListContainersOptions;
use bollard::models::{ContainerSummary, Port};
use dockboard_core::{Error, Result};

use crate::{ContainerRuntime, RawContainer, RawPort};

/// Seconds before a socket request times out (bollard's own default).
const SOCKET_TIMEOUT_SECS: u64 = 120;

/// Lists containers through the Docker Engine API.
///
/// A fresh client is connected for every call, so a daemon that starts after
/// the dashboard is picked up on the next request.
#[derive(Debug, Clone, Default)]
pub struct DockerRuntime {
    socket_path: Option<String>,
}

impl DockerRuntime {
    /// Use the local defaults (`DOCKER_HOST` or the platform socket).
    #[must_use]
    pub const fn new() -> Self {
        Self { socket_path: None }
    }

    /// Use a custom socket path.
    #[must_use]
    pub fn with_socket(socket_path: impl Into<String>) -> Self {
        Self {
            socket_path: Some(socket_path.into()),
        }
    }

    fn connect(&self) -> Result<Docker> {
        let docker = self.socket_path.as_deref().map_or_else(
            Docker::connect_with_local_defaults,
            |path| {
                Docker::connect_with_socket(path, SOCKET_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
            },
        );
        docker.map_err(|e| Error::RuntimeUnavailable(e.to_string()))
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_running(&self) -> Result<Vec<RawContainer>> {
        let docker = self.connect()?;

        let options = ListContainersOptions::<String> {
            all: false,
            ..Default::default()
        };

        let containers = docker
            .list_containers(Some(options))
            .await
            .map_err(|e| Error::RuntimeUnavailable(e.to_string()))?;

        tracing::debug!(count = containers.len(), "listed running containers");
        Ok(containers.into_iter().map(RawContainer::from).collect())
    }
}

impl From<ContainerSummary> for RawContainer {
    fn from(summary: ContainerSummary) -> Self {
        Self {
            id: summary.id,
            names: summary.names.unwrap_or_default(),
            image: summary.image,
            status: summary.status,
            state: summary.state,
            ports: summary
                .ports
                .unwrap_or_default()
                .into_iter()
                .map(RawPort::from)
                .collect(),
        }
    }
}

impl From<Port> for RawPort {
    fn from(port: Port) -> Self {
        Self {
            private_port: port.private_port,
            public_port: port.public_port,
            protocol: port.typ.map(|typ| typ.to_string()).unwrap_or_default(),
            ip: port.ip,
        }
    }
}
