//! User service: registration and lookup of users over HTTP.

use clap::Parser;
use storefront::config::UserServiceConfig;
use storefront::db;
use storefront::lifecycle::{setup_tracing, UserSystem};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = UserServiceConfig::parse();

    let pool = db::connect(&config.database_url).await?;
    let system = UserSystem::start(pool).await?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "User service listening");

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
