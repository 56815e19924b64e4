//! narratore-symbols - Dream-symbol microservice
//!
//! Extracts symbols from dream descriptions, locates them in the text and
//! segments the text for highlighting. Uses Gemini when an API key is
//! configured and static fallback data otherwise.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use narratore_common::config::{load_or_default, ConfigResolver, ConfigSource};
use narratore_symbols::config::{build_symbol_service, resolve_gemini_api_key, GEMINI_API_KEY_ENV};
use narratore_symbols::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for narratore-symbols
#[derive(Parser, Debug)]
#[command(name = "narratore-symbols")]
#[command(about = "Dream-symbol extraction and highlighting service")]
#[command(version)]
struct Args {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides config file)
    #[arg(short, long, env = "NARRATORE_BIND")]
    bind: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "NARRATORE_PORT")]
    port: Option<u16>,

    /// Gemini API key (also read from GEMINI_API_KEY)
    #[arg(long)]
    gemini_api_key: Option<String>,

    /// Gemini model name (overrides config file)
    #[arg(long, env = "NARRATORE_GEMINI_MODEL")]
    gemini_model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = ConfigResolver::new(args.config.clone()).resolve();
    let (mut config, config_source) =
        load_or_default(config_path.as_deref()).context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("narratore_symbols={},tower_http=info", config.logging.level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting narratore-symbols v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_source {
        ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
        ConfigSource::Missing(path) => {
            warn!("Config file {} not found, using compiled defaults", path.display())
        }
        ConfigSource::Defaults => warn!("No config directory available, using compiled defaults"),
    }

    if let Some(model) = args.gemini_model {
        config.gemini.model = model;
    }

    let env_key = std::env::var(GEMINI_API_KEY_ENV).ok();
    let api_key = resolve_gemini_api_key(args.gemini_api_key.as_deref(), env_key.as_deref(), &config);
    let symbols = build_symbol_service(api_key.as_deref(), &config);

    let state = AppState::new(symbols);
    let app = build_router(state);

    let bind = args.bind.unwrap_or_else(|| config.bind_address.clone());
    let port = args.port.unwrap_or(config.port);
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
