//! # Resource Stores
//!
//! A `ResourceStore<T>` is the storage half of a resource actor. The actor owns exactly one
//! store for its whole life and is the only caller, so implementations take `&mut self` and
//! need no internal locking.
//!
//! [`InMemoryStore`] keeps entities in a map and is what tests use. The SQLite stores live
//! next to their entities in `user_actor` and `order_actor`.

use crate::framework::entity::ActorEntity;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Errors raised by a store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// Any other failure of the backing storage.
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(db.message().to_string())
            }
            _ => StoreError::Backend(e.to_string()),
        }
    }
}

/// Durable (or not) home of the entities managed by one actor.
#[async_trait]
pub trait ResourceStore<T: ActorEntity>: Send + 'static {
    /// All records in natural storage order.
    async fn list(&mut self) -> Result<Vec<T>, StoreError>;

    async fn fetch(&mut self, id: &T::Id) -> Result<Option<T>, StoreError>;

    /// Persists a new record and returns it with its assigned id.
    async fn insert(&mut self, params: T::Create) -> Result<T, StoreError>;

    /// Writes back a record that already exists.
    async fn save(&mut self, item: &T) -> Result<(), StoreError>;

    /// Returns `false` when nothing was removed.
    async fn remove(&mut self, id: &T::Id) -> Result<bool, StoreError>;
}

/// Map-backed store. Ids come from a counter that is never rewound, so a deleted id is
/// never handed out again.
pub struct InMemoryStore<T: ActorEntity> {
    items: BTreeMap<T::Id, T>,
    next_id: i64,
}

impl<T: ActorEntity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[async_trait]
impl<T: ActorEntity> ResourceStore<T> for InMemoryStore<T> {
    async fn list(&mut self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.values().cloned().collect())
    }

    async fn fetch(&mut self, id: &T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.items.get(id).cloned())
    }

    async fn insert(&mut self, params: T::Create) -> Result<T, StoreError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        let item = T::from_create_params(id.clone(), params);
        self.items.insert(id, item.clone());
        Ok(item)
    }

    async fn save(&mut self, item: &T) -> Result<(), StoreError> {
        let id = item.id();
        match self.items.get_mut(&id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(())
            }
            None => Err(StoreError::Backend(format!("no record {id} to save"))),
        }
    }

    async fn remove(&mut self, id: &T::Id) -> Result<bool, StoreError> {
        Ok(self.items.remove(id).is_some())
    }
}
