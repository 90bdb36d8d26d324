//! Order service: orders over HTTP, each checked against the user service when created.

use clap::Parser;
use std::sync::Arc;
use storefront::clients::HttpUserDirectory;
use storefront::config::OrderServiceConfig;
use storefront::db;
use storefront::lifecycle::{setup_tracing, OrderSystem};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = OrderServiceConfig::parse();

    let directory = HttpUserDirectory::new(&config.user_service_url, config.user_service_timeout())?;
    info!(url = %config.user_service_url, "Checking users against user service");

    let pool = db::connect(&config.database_url).await?;
    let system = OrderSystem::start(pool, Arc::new(directory)).await?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "Order service listening");

    axum::serve(listener, system.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
    }
    info!("Shutdown signal received");
}
