use crate::clients::actor_client::ActorClient;
use crate::clients::user_directory::{UserDirectory, UserLookup};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::entity::check_product;
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Orchestration logic (the user existence check) happens here, in the caller's task, before
/// the create is sent. The actor itself only validates and persists, so a lookup waiting on
/// the user service never delays other order requests.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    directory: Arc<dyn UserDirectory>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { inner, directory }
    }

    /// Validates the product, asks the directory about the user, then creates the order.
    ///
    /// The payload is checked first so a bad request never costs a network call.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        check_product(&params.product)?;

        match self.directory.lookup(params.user_id).await {
            UserLookup::Found => {}
            UserLookup::NotFound => {
                info!(user_id = %params.user_id, "Rejecting order for unknown user");
                return Err(OrderError::UserNotFound(params.user_id.to_string()));
            }
            UserLookup::Unreachable(reason) => {
                return Err(OrderError::UserServiceUnavailable(reason));
            }
        }

        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Storage(msg) => OrderError::DatabaseError(msg),
            other => {
                other.into_entity_error(|e| OrderError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}
