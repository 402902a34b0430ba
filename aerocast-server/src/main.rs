//! Process bootstrap: CLI parsing, logging, configuration, roster
//! seeding and the HTTP listener.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aerocast_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoad},
    seed::seed_registry,
    store::SyncStore,
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "aerocast-server")]
#[command(about = "Broadcast overlay control server for live competition coverage")]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "AEROCAST_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "AEROCAST_HOST")]
    host: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "AEROCAST_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a JSON roster seed file ({"teams": [...]})
    #[arg(long, env = "AEROCAST_SEED")]
    seed: Option<PathBuf>,

    /// Directory containing the overlay and control-panel static bundles
    #[arg(long, env = "AEROCAST_ASSETS")]
    assets: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run_server(args).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let ConfigLoad {
        mut config,
        warnings,
    } = Config::load(args.config.as_deref()).context("failed to load configuration")?;

    for warning in &warnings {
        warn!(message = %warning.message, "configuration warning");
    }

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if args.seed.is_some() {
        config.seed.path = args.seed.clone();
    }
    if args.assets.is_some() {
        config.assets.root = args.assets.clone();
    }

    Ok(config)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = Arc::new(load_runtime_config(&args)?);

    if config.dev_mode {
        info!("dev mode enabled - CORS is permissive");
    }

    let registry = seed_registry(config.seed.path.as_deref());
    info!(teams = registry.len(), "roster ready");

    let state = AppState::new(SyncStore::new(registry), Arc::clone(&config));
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    info!("Starting Aerocast overlay server (HTTP) on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
