//! Plugin Portal server entry point

use anyhow::Result;
use clap::Parser;
use portal_core::db::{DatabaseConfig, DatabaseManager};
use portal_core::infrastructure::SqlitePluginRepository;
use portal_server::{router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "portal-server", about = "HTTP registry for plugins and their versions")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Path to the SQLite database file
    #[arg(long, default_value = "portal.sqlite")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig {
        path: args.database,
        ..Default::default()
    };
    let mut manager = DatabaseManager::new(config);
    manager.initialize().await?;

    let repository = Arc::new(SqlitePluginRepository::new(manager.pool()?.clone()));
    let app = router(AppState::new(repository)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Plugin portal listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        return;
    }
    info!("Shutdown signal received, stopping");
}
