//! Command-line and environment configuration for the two binaries.

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// `user-service` arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "user-service", about = "User registration and lookup service", version)]
pub struct UserServiceConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "USER_SERVICE_BIND", default_value = "0.0.0.0:5001")]
    pub bind: SocketAddr,
    /// SQLite database holding the `users` table. Created if missing.
    #[arg(
        long = "database-url",
        value_name = "url",
        env = "USER_DATABASE_URL",
        default_value = "sqlite://users.db"
    )]
    pub database_url: String,
}

/// `order-service` arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "order-service", about = "Order service backed by the user service", version)]
pub struct OrderServiceConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "ORDER_SERVICE_BIND", default_value = "0.0.0.0:5002")]
    pub bind: SocketAddr,
    /// SQLite database holding the `orders` table. Created if missing.
    #[arg(
        long = "database-url",
        value_name = "url",
        env = "ORDER_DATABASE_URL",
        default_value = "sqlite://orders.db"
    )]
    pub database_url: String,
    /// Root URL of the user service.
    #[arg(
        long = "user-service-url",
        value_name = "url",
        env = "USER_SERVICE_URL",
        default_value = "http://localhost:5001"
    )]
    pub user_service_url: String,
    /// Upper bound on each user existence check, in milliseconds.
    #[arg(
        long = "user-service-timeout-ms",
        value_name = "ms",
        env = "USER_SERVICE_TIMEOUT_MS",
        default_value_t = 5000
    )]
    pub user_service_timeout_ms: u64,
}

impl OrderServiceConfig {
    pub fn user_service_timeout(&self) -> Duration {
        Duration::from_millis(self.user_service_timeout_ms)
    }
}
