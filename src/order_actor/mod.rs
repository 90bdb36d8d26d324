//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;
pub mod store;

pub use error::*;
pub use store::SqliteOrderStore;

use crate::clients::{OrderClient, UserDirectory};
use crate::framework::{ResourceActor, ResourceStore};
use crate::model::Order;
use std::sync::Arc;

/// Channel capacity of the order actor.
pub const BUFFER_SIZE: usize = 32;

/// Creates a new Order actor over `store` and its client.
///
/// The user directory goes to the client, which consults it before sending a create.
pub fn new(
    store: impl ResourceStore<Order>,
    directory: Arc<dyn UserDirectory>,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(BUFFER_SIZE, store);
    let client = OrderClient::new(generic_client, directory);

    (actor, client)
}
