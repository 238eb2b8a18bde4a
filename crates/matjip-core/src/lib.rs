//! # matjip-core: Pure Domain Logic for Matjip
//!
//! This crate is the heart of the matjip table-ordering system. It contains
//! the cart aggregator, the business-number checksum, money arithmetic, and
//! input validation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Page layer (menu, order cart, owner area — external)               │
//! │                              │                                      │
//! │  ┌───────────────────────────▼───────────────────────────────────┐  │
//! │  │              ★ matjip-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────────────┐    │  │
//! │  │   │  types  │ │  money  │ │  cart   │ │ bizno/validation│    │  │
//! │  │   │  Dish   │ │   Won   │ │  Cart   │ │ checksum, rules │    │  │
//! │  │   │ Topping │ │         │ │CartLine │ │                 │    │  │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────────────┘    │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO NETWORK • NO ASYNC • PURE FUNCTIONS             │  │
//! │  └───────────────────────────┬───────────────────────────────────┘  │
//! │                              │                                      │
//! │  matjip-store (cart slot persistence) / matjip-api (gateways)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Dish, Topping, OrderItem, BusinessInfo)
//! - [`money`] - Won amounts with integer arithmetic (no floating point!)
//! - [`cart`] - Cart aggregation: merge, quantities, totals, order payload
//! - [`bizno`] - Business registration number format/clean/checksum
//! - [`validation`] - Form-input rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use matjip_core::bizno;
//! use matjip_core::cart::Cart;
//!
//! assert!(bizno::validate_business_number("123-45-67891"));
//! assert_eq!(bizno::format_business_number("1234567891"), "123-45-67891");
//!
//! let cart = Cart::new();
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bizno;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bizno::BusinessNumber;
pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Won;
pub use types::*;
