//! Route definitions and the page handler.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use dockboard_core::Error;
use dockboard_docker::ContainerLister;
use tower_http::trace::TraceLayer;

use crate::{Dashboard, PageRenderer};

/// Shared, read-only state for handlers.
pub struct AppState {
    /// Source of container rows.
    pub lister: ContainerLister,
    /// Compiled page template.
    pub renderer: PageRenderer,
}

impl AppState {
    /// Create handler state.
    #[must_use]
    pub const fn new(lister: ContainerLister, renderer: PageRenderer) -> Self {
        Self { lister, renderer }
    }
}

/// Creates the dashboard router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// GET / - Render the running containers page.
async fn index(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let dashboard = Dashboard::load(&state.lister).await?;
    let body = state.renderer.render(&dashboard)?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Html(body),
    )
        .into_response())
}

/// A failure that breaks the page.
struct PageError(Error);

impl From<Error> for PageError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("failed to render page: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CACHE_CONTROL, "no-store")],
            "Internal Server Error",
        )
            .into_response()
    }
}
