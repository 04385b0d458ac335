//! Configuration management.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default port the dashboard listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Docker socket path. Local defaults are used when unset.
    pub docker_socket: Option<String>,
    /// Host placed in container links (`HOST_URL`).
    pub host_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            docker_socket: None,
            host_url: None,
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory, or defaults
    /// when no file exists there.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Serialization`] if it is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get configuration file path.
    fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "dockboard")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .ok_or_else(|| Error::Config("could not determine config directory".into()))
    }
}
