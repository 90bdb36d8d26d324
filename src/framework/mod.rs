//! Generic actor framework for resource management.
//!
//! The building blocks shared by both services: a resource actor that owns storage and
//! processes CRUD requests one at a time, and the typed client that talks to it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a [`ResourceStore`]
//! - [`ResourceClient`] - Type-safe, cloneable handle to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{InMemoryStore, ResourceStore, StoreError};

#[cfg(test)]
pub(crate) mod testing {
    //! A minimal entity for exercising the framework on its own.

    use super::ActorEntity;
    use async_trait::async_trait;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Note {
        pub id: i64,
        pub text: String,
    }

    #[derive(Debug)]
    pub struct NoteCreate {
        pub text: String,
    }

    #[derive(Debug)]
    pub struct NoteUpdate {
        pub text: Option<String>,
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    pub enum NoteError {
        #[error("note text is empty")]
        Empty,
    }

    #[async_trait]
    impl ActorEntity for Note {
        type Id = i64;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> i64 {
            self.id
        }

        fn from_create_params(id: i64, params: NoteCreate) -> Self {
            Self {
                id,
                text: params.text,
            }
        }

        async fn on_create(params: &NoteCreate, _ctx: &()) -> Result<(), NoteError> {
            if params.text.is_empty() {
                return Err(NoteError::Empty);
            }
            Ok(())
        }

        async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), NoteError> {
            if let Some(text) = update.text {
                self.text = text;
            }
            Ok(())
        }
    }
}
