//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map directly to the CRUD lifecycle of a resource:
///
/// - **List**: every record, in storage order.
/// - **Create**: uses [`ActorEntity::Create`] to insert a new resource.
/// - **Get**: fetches the current state of a resource by ID.
/// - **Update**: uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: removes the resource.
///
/// Being generic over `T: ActorEntity` means a user payload can never reach the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
