//! # matjip-api: Gateways and the Order Session
//!
//! Every HTTP boundary of the matjip system, each behind a trait with a
//! remote implementation and a fixture implementation:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  DishSource        GET/POST/PUT/DELETE /dish     │ FixtureDishSource │
//! │  OrderEndpoint     POST /dish/order              │ FixtureOrder...   │
//! │  AuthGateway       /auth/*                       │ FixtureAuth...    │
//! │  BusinessVerifier  NTS /v1/validate, /v1/status  │ FixtureBusiness.. │
//! │  BlobStore         POST /images/upload           │ FixtureBlobStore  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Which implementation runs is decided **once, at construction time**
//! (`select_dish_source`, config-driven wiring) — never by per-call
//! try/catch fallbacks. Remote calls carry an explicit [`RequestContext`];
//! there is no client singleton and no interceptor.
//!
//! [`session::OrderSession`] is the ordering flow's entry point: it owns the
//! cart, mirrors it into the `dish-order-cart` slot on every mutation, and
//! submits orders with graceful degradation.
//!
//! [`RequestContext`]: context::RequestContext

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod blob;
pub mod business;
pub mod config;
pub mod context;
pub mod dishes;
pub mod error;
pub mod fixtures;
pub mod orders;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{AuthGateway, FixtureAuthGateway, RemoteAuthGateway};
pub use blob::{BlobStore, FixtureBlobStore, RemoteBlobStore};
pub use business::{BusinessVerifier, FixtureBusinessVerifier, RemoteBusinessVerifier};
pub use config::{ApiConfig, ConfigError};
pub use context::RequestContext;
pub use dishes::{select_dish_source, DishSource, FixtureDishSource, RemoteDishSource};
pub use error::{ApiError, ApiResult};
pub use orders::{FixtureOrderEndpoint, OrderEndpoint, RemoteOrderEndpoint};
pub use session::{OrderOutcome, OrderSession};
