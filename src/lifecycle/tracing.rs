//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for either
//! service binary.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the crate/module prefix (`with_target(false)`);
//! the actor logs carry an `entity_type` field instead. The level comes from `RUST_LOG` and
//! defaults to `info`.
//!
//! ```bash
//! # Actor lifecycle, creates, updates and deletes
//! cargo run --bin order-service
//!
//! # Full payloads and every HTTP request
//! RUST_LOG=debug cargo run --bin order-service
//! ```
//!
//! ## Order creation
//!
//! **With `RUST_LOG=info`**, a rejected and an accepted order look like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO create_order: Rejecting order for unknown user user_id=user_999
//! INFO Created entity_type="Order" id=order_1
//! ```
//!
//! The user lookup runs inside the client's `create_order` span; the actor runs in its own
//! task, so its lines sit outside it. **With `RUST_LOG=debug`** the lookup and the payload
//! show up too:
//!
//! ```text
//! DEBUG create_order: User exists user_id=user_1
//! DEBUG create_order: Sending request
//! DEBUG Create entity_type="Order" params=OrderCreate { user_id: UserId(1), product: "Book" }
//! ```
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
