//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a resource's storage and
//! processes every request against it sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::store::ResourceStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the storage handle (`store`) and
/// the receiver end of the channel for the lifetime of the process.
///
/// **Concurrency Model**:
/// Requests are handled one at a time in [`run`](Self::run), so the store needs no `Mutex`.
/// HTTP handlers never touch storage directly; they hold a cloned [`ResourceClient`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(buffer, store)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use storefront::framework::{InMemoryStore, ResourceActor};
/// use storefront::model::{User, UserCreate};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<User>::new(10, InMemoryStore::new());
///     tokio::spawn(actor.run(()));
///
///     let user = client
///         .create(UserCreate { name: "Ada".into(), email: "ada@x.com".into() })
///         .await
///         .unwrap();
///     assert_eq!(user.id.0, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: runs the `on_create` hook against the payload, then inserts through the store.
///   Nothing is written when the hook fails.
/// * **Get / List**: read straight from the store.
/// * **Update**: fetches the record, lets `on_update` apply the partial update, saves it back.
/// * **Delete**: fetches the record, runs `on_delete`, removes it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn ResourceStore<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the MPSC channel. When full, client calls wait for space.
    /// * `store` - the storage this actor owns from now on.
    pub fn new(buffer_size: usize, store: impl ResourceStore<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Box::new(store),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "User" instead of "storefront::model::user::User"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let result = self.store.list().await.map_err(FrameworkError::from);
                    if let Ok(items) = &result {
                        debug!(entity_type, count = items.len(), "List");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    if let Err(e) = T::on_create(&params, &context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    match self.store.insert(params).await {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e.into()));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.store.fetch(&id).await.map_err(FrameworkError::from);
                    let found = matches!(result, Ok(Some(_)));
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = self
            .store
            .fetch(id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(update, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.save(&item).await?;
        Ok(item)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .fetch(id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if !self.store.remove(id).await? {
            return Err(FrameworkError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::store::InMemoryStore;
    use crate::framework::testing::{Note, NoteCreate, NoteError, NoteUpdate};

    fn spawn_notes() -> ResourceClient<Note> {
        let (actor, client) = ResourceActor::<Note>::new(8, InMemoryStore::new());
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn create_then_get_round_trips_through_the_actor() {
        let client = spawn_notes();
        let note = client
            .create(NoteCreate { text: "hello".into() })
            .await
            .unwrap();
        assert_eq!(note.id, 1);
        assert_eq!(client.get(1).await.unwrap(), Some(note));
        assert_eq!(client.get(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_on_create_hook_writes_nothing() {
        let client = spawn_notes();
        let err = client
            .create(NoteCreate {
                text: String::new(),
            })
            .await
            .unwrap_err();
        let typed: NoteError = err.into_entity_error(|e| panic!("unexpected {e}"));
        assert_eq!(typed, NoteError::Empty);
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let client = spawn_notes();
        let err = client
            .update(7, NoteUpdate { text: None })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "7"));
        let err = client.delete(7).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_update_keeps_fields() {
        let client = spawn_notes();
        let note = client
            .create(NoteCreate { text: "keep".into() })
            .await
            .unwrap();
        let updated = client
            .update(note.id, NoteUpdate { text: None })
            .await
            .unwrap();
        assert_eq!(updated, note);
    }

    #[tokio::test]
    async fn actor_stops_when_clients_are_dropped() {
        let (actor, client) = ResourceActor::<Note>::new(8, InMemoryStore::new());
        let handle = tokio::spawn(actor.run(()));
        drop(client);
        handle.await.unwrap();
    }
}
