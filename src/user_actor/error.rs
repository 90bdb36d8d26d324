//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same email already exists.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An underlying database error occurred.
    #[error("User database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
