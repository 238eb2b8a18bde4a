//! # matjip-store: Persistence Layer for Matjip
//!
//! SQLite-backed key-value slot storage. The shopping cart is mirrored into
//! the `dish-order-cart` slot on every mutation and rehydrated from it at
//! session start; see [`cart_store::CartStore`].
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded store migrations
//! - [`error`] - Store error types
//! - [`repository`] - Slot repository
//! - [`cart_store`] - Cart slot with degrade-to-empty failure semantics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use matjip_store::{CartStore, Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("path/to/matjip.db")).await?;
//! let cart_store = CartStore::new(store.kv());
//!
//! let lines = cart_store.load().await; // empty if absent or corrupt
//! cart_store.save(&lines).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_store::{CartStore, CART_SLOT_KEY};
pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};
pub use repository::kv::KvRepository;
