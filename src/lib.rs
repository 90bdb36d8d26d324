//! # Storefront
//!
//! Two small HTTP services built on resource-oriented actors:
//!
//! - the **user service** registers, lists, updates and deletes users;
//! - the **order service** does the same for orders, and refuses to create an order whose
//!   user the user service does not know.
//!
//! ## Core Concepts
//!
//! ### One actor per resource
//! Each service runs a single `ResourceActor<T>` that owns the SQLite connection for its
//! table. Requests are processed one at a time, so the store needs no locks. HTTP handlers
//! never see the database; they hold a cloned client and send it messages.
//!
//! ### Async Context Injection
//! Dependencies are injected when the actor starts running, through `run(context)`. Neither
//! actor needs one: the [`UserDirectory`](clients::UserDirectory) that guards order creation
//! lives in the [`OrderClient`](clients::OrderClient), so the lookup runs in the request's own
//! task and never queues behind the actor.
//!
//! ### Type-Safe Error Handling
//! Each actor defines its own error type ([`UserError`](user_actor::UserError),
//! [`OrderError`](order_actor::OrderError)). Entity hooks return them, the framework boxes
//! them on the way through the channel, and the domain clients recover them by downcast.
//! The [`http`] layer turns them into status codes.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the storage trait and the mock client.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor), [`ResourceStore`](framework::ResourceStore).
//!
//! ### 2. The Orchestrators ([`lifecycle`])
//! Spawn each service's actor and stop it again.
//! - **Key items**: [`UserSystem`](lifecycle::UserSystem), [`OrderSystem`](lifecycle::OrderSystem).
//!
//! ### 3. The Interface ([`clients`], [`http`])
//! Domain clients over the generic `ResourceClient`, the HTTP-backed user directory, and the
//! axum routers.
//!
//! ### 4. The Implementation ([`user_actor`], [`order_actor`], [`model`])
//! Entities, validation rules, errors and SQLite stores.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin user-service &
//! cargo run --bin order-service
//!
//! curl -X POST localhost:5001/register -H 'content-type: application/json' \
//!      -d '{"name":"Ada","email":"ada@x.com"}'
//! curl -X POST localhost:5002/order -H 'content-type: application/json' \
//!      -d '{"user_id":1,"product":"Book"}'
//! ```

pub mod clients;
pub mod config;
pub mod db;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod user_actor;
