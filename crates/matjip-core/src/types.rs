//! # Domain Types
//!
//! Core domain types used throughout matjip.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Dish { id, dishData }                                              │
//! │     └── DishData { name, description, image, ingredients,           │
//! │                    price, toppings, tag, type }                     │
//! │            ├── Ingredient { name, from }                            │
//! │            ├── Topping    { name, price }                           │
//! │            └── DishTags   { hot, new, picked }                      │
//! │                                                                     │
//! │  OrderItem    { name, toppings }      checkout wire payload         │
//! │  BusinessInfo { businessNumber, ... } owner account record          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names follow the backend wire format (camelCase, `type` kept via
//! rename). A `Dish` is immutable once fetched; whichever page loaded it
//! owns the value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Won;

// =============================================================================
// Ingredient
// =============================================================================

/// A named ingredient with its declared origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Origin label shown on the menu ("국내산" etc.). Wire name is `from`.
    pub from: String,
}

// =============================================================================
// Topping
// =============================================================================

/// An optional extra for a dish.
///
/// Value type with structural equality. Selection-toggle logic compares by
/// `name`; cart-line identity compares the full ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub name: String,
    pub price: Won,
}

// =============================================================================
// Dish Tags
// =============================================================================

/// Menu badges for a dish.
///
/// The wire format carries these as a single-element `tag` array; see
/// [`DishData::primary_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DishTags {
    pub hot: bool,
    pub new: bool,
    pub picked: bool,
}

// =============================================================================
// Dish
// =============================================================================

/// Everything the menu shows about a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishData {
    pub name: String,
    pub description: String,
    /// Image URL or path. Fixture uploads use synthetic `/images/...` paths.
    pub image: String,
    pub ingredients: Vec<Ingredient>,
    /// Price in whole won.
    pub price: Won,
    pub toppings: Vec<Topping>,
    /// Singleton list on the wire.
    pub tag: Vec<DishTags>,
    /// Menu section ("찌개", "고기", ...). Wire name is `type`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl DishData {
    /// Returns the badge set, if the singleton `tag` list is populated.
    pub fn primary_tag(&self) -> Option<&DishTags> {
        self.tag.first()
    }
}

/// A catalog entry: stable id plus the menu payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub dish_data: DishData,
}

impl Dish {
    /// Returns the base price (before toppings).
    #[inline]
    pub fn price(&self) -> Won {
        self.dish_data.price
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.dish_data.name
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One entry of the checkout payload.
///
/// The kitchen endpoint receives each distinct dish+topping selection once;
/// line quantity is **not** part of the wire payload. This matches the
/// deployed checkout contract, so changing it would silently change what the
/// kitchen sees — keep it as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub toppings: Vec<Topping>,
}

// =============================================================================
// Business Info
// =============================================================================

/// An owner account as the auth endpoints return it (password never leaves
/// the gateway).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub id: i64,
    /// Hyphen-formatted registration number (`XXX-XX-XXXXX`).
    pub business_number: String,
    pub business_name: String,
    pub owner_name: String,
    pub phone: String,
    pub address: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
