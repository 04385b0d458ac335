//! Test doubles shared by the dockboard integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dockboard_core::{Error, Result};
use dockboard_docker::{ContainerRuntime, RawContainer, RawPort};

/// What the fake runtime answers with.
#[derive(Debug, Clone)]
enum Reply {
    Containers(Vec<RawContainer>),
    Unreachable,
    MissingId,
}

/// In-memory runtime that counts how often it is queried.
#[derive(Debug)]
pub struct FakeRuntime {
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeRuntime {
    /// A runtime reporting `containers` as running.
    #[must_use]
    pub const fn with_containers(containers: Vec<RawContainer>) -> Self {
        Self {
            reply: Reply::Containers(containers),
            calls: AtomicUsize::new(0),
        }
    }

    /// A runtime whose socket cannot be reached.
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            reply: Reply::Unreachable,
            calls: AtomicUsize::new(0),
        }
    }

    /// A runtime returning a record without an id.
    #[must_use]
    pub const fn malformed() -> Self {
        Self {
            reply: Reply::MissingId,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of list calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn list_running(&self) -> Result<Vec<RawContainer>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Containers(containers) => Ok(containers.clone()),
            Reply::Unreachable => Err(Error::RuntimeUnavailable(
                "connect ENOENT /var/run/docker.sock".into(),
            )),
            Reply::MissingId => Ok(vec![RawContainer {
                names: vec!["/ghost".to_string()],
                ..Default::default()
            }]),
        }
    }
}

/// Build a raw record the way the Docker API reports it.
#[must_use]
pub fn raw_container(id: &str, name: Option<&str>, ports: Vec<RawPort>) -> RawContainer {
    RawContainer {
        id: Some(id.to_string()),
        names: name.map(|n| vec![format!("/{n}")]).unwrap_or_default(),
        image: Some("nginx:alpine".to_string()),
        status: Some("Up 2 minutes".to_string()),
        state: Some("running".to_string()),
        ports,
    }
}

/// Build a raw port entry.
#[must_use]
pub fn raw_port(private_port: u16, public_port: Option<u16>, protocol: &str) -> RawPort {
    RawPort {
        private_port,
        public_port,
        protocol: protocol.to_string(),
        ip: public_port.map(|_| "0.0.0.0".to_string()),
    }
}
