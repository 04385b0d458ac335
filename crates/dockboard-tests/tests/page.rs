//! Integration tests for the dashboard page.

use std::sync::Arc;

use anyhow::Result;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use dockboard_docker::ContainerLister;
use dockboard_tests::{FakeRuntime, raw_container, raw_port};
use dockboard_web::{AppState, PageRenderer, RUNTIME_ADVISORY, create_router};
use tower::ServiceExt;

struct Page {
    status: StatusCode,
    cache_control: Option<String>,
    body: String,
}

async fn get_page(runtime: Arc<FakeRuntime>, host_url: Option<&str>) -> Result<Page> {
    let lister = ContainerLister::new(runtime, host_url.map(str::to_string));
    let state = AppState::new(lister, PageRenderer::new()?);
    let router = create_router(Arc::new(state));

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    Ok(Page {
        status,
        cache_control,
        body: String::from_utf8(bytes.to_vec())?,
    })
}

#[tokio::test]
async fn test_running_containers_render_as_cards() -> Result<()> {
    let runtime = Arc::new(FakeRuntime::with_containers(vec![
        raw_container(
            "abc123def456789",
            Some("web"),
            vec![raw_port(80, Some(8080), "tcp")],
        ),
        raw_container("0123456789abcdef", None, vec![raw_port(6379, None, "tcp")]),
    ]));

    let page = get_page(Arc::clone(&runtime), Some("nas.local")).await?;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.cache_control.as_deref(), Some("no-store"));
    assert!(page.body.contains("Running Containers"));
    assert!(page.body.contains(r#"href="http://nas.local:8080" target="_blank""#));
    assert!(page.body.contains("TCP 8080:80"));
    assert!(page.body.contains("TCP -:6379"));
    assert!(page.body.contains(">web<"));
    assert!(page.body.contains(">0123456789ab<"));
    assert!(page.body.contains(r##"class="card inert" href="#""##));
    assert!(!page.body.contains(RUNTIME_ADVISORY));
    assert_eq!(runtime.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_runtime_shows_empty_state() -> Result<()> {
    let runtime = Arc::new(FakeRuntime::with_containers(Vec::new()));

    let page = get_page(runtime, Some("nas.local")).await?;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("No running containers found."));
    assert!(!page.body.contains(RUNTIME_ADVISORY));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_runtime_shows_advisory_only() -> Result<()> {
    let runtime = Arc::new(FakeRuntime::unreachable());

    let page = get_page(Arc::clone(&runtime), Some("nas.local")).await?;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(RUNTIME_ADVISORY));
    assert!(!page.body.contains("No running containers found."));
    assert!(!page.body.contains("class=\"card"));
    assert_eq!(runtime.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_malformed_record_breaks_page() -> Result<()> {
    let runtime = Arc::new(FakeRuntime::malformed());

    let page = get_page(runtime, Some("nas.local")).await?;

    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!page.body.contains(RUNTIME_ADVISORY));
    Ok(())
}

#[tokio::test]
async fn test_unset_host_keeps_placeholder_link() -> Result<()> {
    let runtime = Arc::new(FakeRuntime::with_containers(vec![raw_container(
        "abc123def456789",
        Some("web"),
        vec![raw_port(80, Some(8080), "tcp")],
    )]));

    let page = get_page(runtime, None).await?;

    assert!(page.body.contains(r#"href="http://undefined:8080""#));
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_not_found() -> Result<()> {
    let lister = ContainerLister::new(Arc::new(FakeRuntime::with_containers(Vec::new())), None);
    let router = create_router(Arc::new(AppState::new(lister, PageRenderer::new()?)));

    let response = router
        .oneshot(Request::builder().uri("/api/containers").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
