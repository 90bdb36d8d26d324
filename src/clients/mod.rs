//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient), plus the
//! order service's view of the user service.

pub mod actor_client;
pub mod order_client;
pub mod user_client;
pub mod user_directory;

pub use actor_client::*;
pub use order_client::*;
pub use user_client::*;
pub use user_directory::*;
