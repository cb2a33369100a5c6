use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_finder::config::ServerConfig;
use route_finder::network::Graph;
use route_finder::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    // No query can be served without a graph, so load failures are fatal.
    let graph = match Graph::load(&config.data_path) {
        Ok(graph) => graph,
        Err(e) => {
            error!("Failed to load graph: {e}");
            process::exit(1);
        }
    };

    let state = AppState::new(graph, config.search.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "Failed to bind: {e}");
            process::exit(1);
        }
    };

    info!(addr = %config.addr, "Route server listening");
    info!("  GET /health               - Health check");
    info!("  GET /routes               - Find routes (from, to, maxdepth, maxroutes, mode)");
    info!("  GET /api/stations/search  - Search stations by name (q, limit)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
