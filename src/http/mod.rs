//! HTTP surface of both services.
//!
//! Handlers are thin: they parse the request, call the domain client held in router state,
//! and let the error types render themselves through [`IntoResponse`](axum::response::IntoResponse).

pub mod error;
pub mod orders;
pub mod users;
