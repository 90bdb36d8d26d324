use crate::clients::UserClient;
use crate::framework::{ResourceStore, StoreError};
use crate::model::User;
use crate::user_actor::SqliteUserStore;
use axum::Router;
use sqlx::SqlitePool;
use tracing::{error, info};

/// Runtime orchestrator of the user service.
///
/// Owns the user actor's task handle and the client every HTTP handler clones.
///
/// # Example
///
/// ```ignore
/// let system = UserSystem::start(db::connect("sqlite://users.db").await?).await?;
/// axum::serve(listener, system.router()).await?;
/// system.shutdown().await?;
/// ```
pub struct UserSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Prepares the `users` table in `pool` and spawns the user actor over it.
    pub async fn start(pool: SqlitePool) -> Result<Self, StoreError> {
        let store = SqliteUserStore::init(pool).await?;
        Ok(Self::with_store(store))
    }

    /// Spawns the user actor over an arbitrary store.
    pub fn with_store(store: impl ResourceStore<User>) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(store);
        let handle = tokio::spawn(user_actor.run(()));

        Self {
            user_client,
            handle,
        }
    }

    /// HTTP routes bound to this system's client.
    pub fn router(&self) -> Router {
        crate::http::users::router(self.user_client.clone())
    }

    /// Drops the client and waits for the actor to drain its queue.
    ///
    /// Routers handed out by [`router`](Self::router) hold clones of the client, so the
    /// server must be stopped first or this waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down user service...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("User service shutdown complete.");
        Ok(())
    }
}
