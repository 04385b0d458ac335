//! Page data for one request.

use dockboard_core::{ContainerRow, Error, Result};
use dockboard_docker::ContainerLister;

/// Shown instead of the container list when the runtime cannot be reached.
pub const RUNTIME_ADVISORY: &str = "Unable to contact Docker. Make sure Docker Desktop is running \
     and this app has access to the Docker socket.";

/// Everything the page needs: either rows or an advisory, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Running containers, empty when `error` is set.
    pub rows: Vec<ContainerRow>,
    /// Advisory text when the runtime was unreachable.
    pub error: Option<&'static str>,
}

impl Dashboard {
    /// Query the runtime once and build the page data.
    ///
    /// An unreachable runtime becomes the advisory; any other failure is
    /// returned to the caller.
    ///
    /// # Errors
    /// Returns [`Error::MalformedRecord`] if a runtime record cannot be shown.
    pub async fn load(lister: &ContainerLister) -> Result<Self> {
        match lister.list_containers().await {
            Ok(rows) => Ok(Self::with_rows(rows)),
            Err(Error::RuntimeUnavailable(reason)) => {
                tracing::warn!(%reason, "container runtime unavailable");
                Ok(Self::unavailable())
            }
            Err(e) => Err(e),
        }
    }

    /// Page data for a successful query.
    #[must_use]
    pub const fn with_rows(rows: Vec<ContainerRow>) -> Self {
        Self { rows, error: None }
    }

    /// Page data for an unreachable runtime.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            rows: Vec::new(),
            error: Some(RUNTIME_ADVISORY),
        }
    }
}
