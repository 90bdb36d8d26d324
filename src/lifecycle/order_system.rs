use crate::clients::{OrderClient, UserDirectory};
use crate::framework::{ResourceStore, StoreError};
use crate::model::Order;
use crate::order_actor::SqliteOrderStore;
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator of the order service.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the order actor
/// - **Dependency Wiring**: handing the [`UserDirectory`] to the order client
///
/// # Example
///
/// ```ignore
/// let directory = Arc::new(HttpUserDirectory::new("http://localhost:5001", timeout)?);
/// let system = OrderSystem::start(pool, directory).await?;
///
/// let order = system.order_client.create_order(params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Prepares the `orders` table in `pool` and spawns the order actor over it.
    pub async fn start(
        pool: SqlitePool,
        directory: Arc<dyn UserDirectory>,
    ) -> Result<Self, StoreError> {
        let store = SqliteOrderStore::init(pool).await?;
        Ok(Self::with_store(store, directory))
    }

    /// Spawns the order actor over an arbitrary store.
    pub fn with_store(store: impl ResourceStore<Order>, directory: Arc<dyn UserDirectory>) -> Self {
        let (order_actor, order_client) = crate::order_actor::new(store, directory);
        let handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client,
            handle,
        }
    }

    /// HTTP routes bound to this system's client.
    pub fn router(&self) -> Router {
        crate::http::orders::router(self.order_client.clone())
    }

    /// Drops the client and waits for the actor to drain its queue.
    ///
    /// When the client is dropped its channel sender goes with it; the actor sees the closed
    /// channel and leaves its loop. Stop the HTTP server first, its router holds a clone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order service...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Order service shutdown complete.");
        Ok(())
    }
}
