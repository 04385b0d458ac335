//! Normalization of runtime records into display rows.

use std::sync::Arc;

use dockboard_core::{ContainerRow, Error, PortBinding, Result, derive_url, display_name};

use crate::{ContainerRuntime, RawContainer, RawPort};

/// Status shown when the runtime reports none.
const DEFAULT_STATUS: &str = "running";

/// Lists running containers as display rows.
#[derive(Clone)]
pub struct ContainerLister {
    runtime: Arc<dyn ContainerRuntime>,
    host_url: Option<String>,
}

impl ContainerLister {
    /// Create a lister over `runtime`, linking published ports to `host_url`.
    pub fn new(runtime: Arc<dyn ContainerRuntime>, host_url: Option<String>) -> Self {
        Self { runtime, host_url }
    }

    /// Host used in reachable URLs, if configured.
    #[must_use]
    pub fn host_url(&self) -> Option<&str> {
        self.host_url.as_deref()
    }

    /// Query the runtime once and normalize every running container.
    ///
    /// # Errors
    /// [`Error::RuntimeUnavailable`] when the runtime cannot be reached,
    /// [`Error::MalformedRecord`] when a record has no id.
    pub async fn list_containers(&self) -> Result<Vec<ContainerRow>> {
        let containers = self.runtime.list_running().await?;
        containers
            .into_iter()
            .map(|container| self.to_row(container))
            .collect()
    }

    fn to_row(&self, container: RawContainer) -> Result<ContainerRow> {
        let id = container
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::MalformedRecord("container record without an id".into()))?;

        let ports: Vec<PortBinding> = container.ports.into_iter().map(to_binding).collect();
        let reachable_url = derive_url(&ports, self.host_url());

        Ok(ContainerRow {
            display_name: display_name(&container.names, &id),
            id,
            image: container.image.unwrap_or_default(),
            status_text: container
                .status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            lifecycle_state: container.state,
            ports,
            reachable_url,
        })
    }
}

fn to_binding(port: RawPort) -> PortBinding {
    PortBinding {
        private_port: port.private_port,
        public_port: port.public_port,
        protocol: port.protocol,
        host_ip: port.ip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticRuntime(Vec<RawContainer>);

    #[async_trait]
    impl ContainerRuntime for StaticRuntime {
        async fn list_running(&self) -> Result<Vec<RawContainer>> {
            Ok(self.0.clone())
        }
    }

    struct DownRuntime;

    #[async_trait]
    impl ContainerRuntime for DownRuntime {
        async fn list_running(&self) -> Result<Vec<RawContainer>> {
            Err(Error::RuntimeUnavailable("connection refused".into()))
        }
    }

    fn lister(containers: Vec<RawContainer>) -> ContainerLister {
        ContainerLister::new(
            Arc::new(StaticRuntime(containers)),
            Some("dev.local".to_string()),
        )
    }

    fn web() -> RawContainer {
        RawContainer {
            id: Some("abc123def456789".to_string()),
            names: vec!["/web".to_string()],
            image: Some("nginx".to_string()),
            status: Some("Up 2 min".to_string()),
            state: Some("running".to_string()),
            ports: vec![RawPort {
                private_port: 80,
                public_port: Some(8080),
                protocol: "tcp".to_string(),
                ip: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_maps_record_to_row() {
        let rows = lister(vec![web()]).list_containers().await.unwrap();

        assert_eq!(
            rows,
            vec![ContainerRow {
                id: "abc123def456789".to_string(),
                display_name: "web".to_string(),
                image: "nginx".to_string(),
                status_text: "Up 2 min".to_string(),
                lifecycle_state: Some("running".to_string()),
                ports: vec![PortBinding {
                    private_port: 80,
                    public_port: Some(8080),
                    protocol: "tcp".to_string(),
                    host_ip: None,
                }],
                reachable_url: Some("http://dev.local:8080".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_defaults_for_sparse_record() {
        let sparse = RawContainer {
            id: Some("0123456789abcdef".to_string()),
            ..Default::default()
        };

        let rows = lister(vec![sparse]).list_containers().await.unwrap();
        let row = &rows[0];
        assert_eq!(row.display_name, "0123456789ab");
        assert_eq!(row.status_text, "running");
        assert_eq!(row.image, "");
        assert!(row.lifecycle_state.is_none());
        assert!(row.ports.is_empty());
        assert!(row.reachable_url.is_none());
    }

    #[tokio::test]
    async fn test_ports_kept_verbatim_in_order() {
        let port = |private_port, public_port, protocol: &str| RawPort {
            private_port,
            public_port,
            protocol: protocol.to_string(),
            ip: Some("0.0.0.0".to_string()),
        };
        let container = RawContainer {
            ports: vec![
                port(53, None, "udp"),
                port(80, Some(8080), "tcp"),
                port(80, Some(8080), "tcp"),
            ],
            ..web()
        };

        let rows = lister(vec![container]).list_containers().await.unwrap();
        let protocols: Vec<_> = rows[0].ports.iter().map(|p| p.protocol.as_str()).collect();
        assert_eq!(protocols, ["udp", "tcp", "tcp"]);
        assert_eq!(rows[0].ports[0].host_ip.as_deref(), Some("0.0.0.0"));
        assert_eq!(rows[0].reachable_url.as_deref(), Some("http://dev.local:8080"));
    }

    #[tokio::test]
    async fn test_missing_id_is_malformed() {
        let container = RawContainer { id: None, ..web() };

        let result = lister(vec![container]).list_containers().await;
        assert!(matches!(result, Err(Error::MalformedRecord(_))));
    }

    #[tokio::test]
    async fn test_runtime_error_propagates() {
        let lister = ContainerLister::new(Arc::new(DownRuntime), None);

        let result = lister.list_containers().await;
        assert!(matches!(result, Err(Error::RuntimeUnavailable(_))));
    }
}
