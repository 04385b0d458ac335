use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dockboard_core::{Config, UNSET_HOST_PLACEHOLDER};
use dockboard_docker::{ContainerLister, ContainerRuntime, DockerRuntime};
use dockboard_web::{AppState, DashboardServer, PageRenderer};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "dockboard")]
#[command(author, version, about = "Web page listing running Docker containers and their ports")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to serve the page on
    #[arg(short, long, env = "DOCKBOARD_BIND")]
    bind: Option<SocketAddr>,

    /// Docker socket path
    #[arg(long, env = "DOCKER_SOCKET")]
    docker_socket: Option<String>,

    /// Host used in container links
    #[arg(long, env = "HOST_URL")]
    host_url: Option<String>,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::new(filter))
        .init();
}

fn load_config(cli: Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(socket) = cli.docker_socket {
        config.docker_socket = Some(socket);
    }
    if let Some(host) = cli.host_url {
        config.host_url = Some(host);
    }

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
    }
    tracing::info!("Shutting down...");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = load_config(cli)?;
    if config.host_url.is_none() {
        tracing::warn!(
            "HOST_URL is not set; container links will point at \"{}\"",
            UNSET_HOST_PLACEHOLDER
        );
    }

    let runtime: Arc<dyn ContainerRuntime> = Arc::new(
        config
            .docker_socket
            .as_deref()
            .map_or_else(DockerRuntime::new, DockerRuntime::with_socket),
    );
    let lister = ContainerLister::new(runtime, config.host_url.clone());
    let state = AppState::new(lister, PageRenderer::new()?);

    let server = DashboardServer::bind(config.bind_addr, state)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    println!("Serving running containers at {}", server.url());

    server.run(shutdown_signal()).await?;
    Ok(())
}
