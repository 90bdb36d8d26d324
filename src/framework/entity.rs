//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (User, Order) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, DTOs, context and errors, and provides lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., asking
/// another service whether a referenced record exists). The `Context` type is injected into
/// every hook, so dependencies are bound when the actor starts running rather than when it
/// is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `i64` so stores can hand out row ids.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<i64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance. Every field is optional.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every operation of the actor; clients pattern match on it
    /// after recovering it from [`FrameworkError::EntityError`](crate::framework::FrameworkError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from a freshly assigned ID and the payload.
    /// Called by stores that assign ids themselves.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    // --- Lifecycle Hooks (Async) ---

    /// Called before anything is written. Returning an error aborts the create.
    async fn on_create(_params: &Self::Create, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a partial update to the in-memory copy before it is saved.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
