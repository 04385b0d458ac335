//! Container runtime access for dockboard.
//!
//! This crate queries the container runtime for running containers and
//! turns the raw records into display rows.

mod docker;
mod lister;
mod runtime;

pub use docker::DockerRuntime;
pub use lister::ContainerLister;
pub use runtime::{ContainerRuntime, RawContainer, RawPort};
