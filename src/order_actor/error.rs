//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The user referenced by a new order does not exist.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The user service gave no answer, so the order could not be checked.
    #[error("User service unavailable: {0}")]
    UserServiceUnavailable(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An underlying database error occurred.
    #[error("Order database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
