//! Core types and configuration for dockboard.
//!
//! This crate provides the display model for running containers, the
//! reachable-URL derivation, configuration management and the error
//! types shared across the dockboard workspace.

mod config;
mod container;
mod error;
mod url;

pub use config::{Config, DEFAULT_PORT};
pub use container::{ContainerRow, PortBinding, display_name};
pub use error::{Error, Result};
pub use url::{UNSET_HOST_PLACEHOLDER, derive_url};
