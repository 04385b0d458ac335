//! Server-rendered dashboard page for dockboard.
//!
//! Serves a single page listing running containers as cards that link to
//! their first published port.

mod dashboard;
mod render;
mod router;
mod server;

pub use dashboard::{Dashboard, RUNTIME_ADVISORY};
pub use render::PageRenderer;
pub use router::{AppState, create_router};
pub use server::DashboardServer;
