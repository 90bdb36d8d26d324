//! Startup and shutdown of each service's actor.

pub mod order_system;
pub mod tracing;
pub mod user_system;

pub use order_system::OrderSystem;
pub use self::tracing::setup_tracing;
pub use user_system::UserSystem;
