//! Hosted narrative endpoint binary.

use std::net::SocketAddr;

use tracing::{error, info, warn};

use train_ml_client::GeneratorConfig;
use train_worker::logging::init_tracing;
use train_worker::{hosted_router, HostedConfig, HostedState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Starting train-hosted");

    let config = HostedConfig::from_env();
    info!(
        "Hosted config: host={}, port={}, clip_seconds={}",
        config.host, config.port, config.clip_seconds
    );

    if let Err(e) = train_media::check_ffmpeg() {
        warn!("{}; combining will fail until it is installed", e);
    }

    let state = HostedState::from_config(&config, GeneratorConfig::from_env());
    let app = hosted_router(state);

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {}:{}: {}", config.host, config.port, e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
