//! Dashboard HTTP server.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{AppState, create_router};

/// A bound, not yet running, dashboard server.
pub struct DashboardServer {
    listener: TcpListener,
    state: Arc<AppState>,
    addr: SocketAddr,
}

impl DashboardServer {
    /// Bind the listening socket.
    ///
    /// # Errors
    /// Returns error if the address cannot be bound.
    pub async fn bind(addr: SocketAddr, state: AppState) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        Ok(Self {
            listener,
            state: Arc::new(state),
            addr,
        })
    }

    /// Returns the server address.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the page URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve requests until `shutdown` resolves.
    ///
    /// # Errors
    /// Returns error if the server fails while accepting connections.
    pub async fn run(self, shutdown: impl Future<Output = ()> + Send + 'static) -> std::io::Result<()> {
        let router = create_router(self.state);

        tracing::info!("dashboard listening on http://{}", self.addr);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
