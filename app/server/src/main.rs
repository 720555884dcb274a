use anyhow::{Context, Result};
use rustls::crypto::ring::default_provider;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use novachain_server::{config::Config, routes, BalanceFetcher, Dashboard, HttpExplorer};

fn install_crypto_provider() {
    // Safe to call once; ignore error if already installed
    let _ = default_provider().install_default();
}

/// NovaChain dashboard host
///
/// Serves the read-only address dashboard on localhost. All chain data
/// comes from the configured block explorer; nothing is persisted.
#[tokio::main]
async fn main() -> Result<()> {
    install_crypto_provider();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("NovaChain dashboard starting...");

    let config = Config::from_env();
    info!("Using block explorer: {}", config.explorer_base_url);
    info!("Admin address: {}", config.admin_address);

    let explorer = HttpExplorer::new(config.explorer_base_url.clone())
        .context("Failed to initialize block explorer client")?;
    let fetcher = BalanceFetcher::new(Arc::new(explorer));
    let dashboard = Arc::new(Dashboard::new(fetcher, config.admin_address));

    let app = routes::router(dashboard);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3829));
    info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await.context("Failed to bind")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down...");
        })
        .await?;
    Ok(())
}
