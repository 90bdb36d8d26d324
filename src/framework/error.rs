//! # Framework Errors
//!
//! Errors shared by every resource actor and client. Entity-specific failures
//! travel inside [`FrameworkError::EntityError`] and are recovered by the
//! domain clients through `downcast`.

use crate::framework::store::StoreError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<StoreError> for FrameworkError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(msg) => FrameworkError::Conflict(msg),
            StoreError::Backend(msg) => FrameworkError::Storage(msg),
        }
    }
}

impl FrameworkError {
    /// Recovers a typed entity error, falling back to `fallback` for every other variant.
    pub fn into_entity_error<E>(self, fallback: impl FnOnce(FrameworkError) -> E) -> E
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => *typed,
                Err(other) => fallback(FrameworkError::EntityError(other)),
            },
            other => fallback(other),
        }
    }
}
