//! User-specific resource logic and entity implementation.

pub mod entity;
pub mod error;
pub mod store;

pub use error::*;
pub use store::SqliteUserStore;

use crate::clients::UserClient;
use crate::framework::{ResourceActor, ResourceStore};
use crate::model::User;

/// Channel capacity of the user actor.
pub const BUFFER_SIZE: usize = 32;

/// Creates a new User actor over `store` and its client.
pub fn new(store: impl ResourceStore<User>) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(BUFFER_SIZE, store);
    let client = UserClient::new(generic_client);

    (actor, client)
}
