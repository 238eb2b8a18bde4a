//! # Cart Store
//!
//! Persistence for the shopping cart: the full line sequence, serialized to
//! JSON, under the single slot key `dish-order-cart`.
//!
//! ## Failure Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  save  : write failure        → error!-logged, swallowed            │
//! │  load  : absent slot          → empty cart                          │
//! │          read failure         → warn!-logged, empty cart            │
//! │          corrupt JSON         → warn!-logged, empty cart            │
//! │  clear : delete failure       → error!-logged, swallowed            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A broken slot must never take the ordering flow down with it, so nothing
//! here returns an error to the caller. The persisted form is the plain JSON
//! of the line sequence — no derived fields, so a save/load round trip is
//! structurally lossless.

use tracing::{error, warn};

use crate::repository::kv::KvRepository;
use matjip_core::CartLine;

/// Slot key for the persisted cart.
pub const CART_SLOT_KEY: &str = "dish-order-cart";

/// The cart's persistence slot.
#[derive(Debug, Clone)]
pub struct CartStore {
    kv: KvRepository,
}

impl CartStore {
    /// Creates a cart store over the given slot repository.
    pub fn new(kv: KvRepository) -> Self {
        CartStore { kv }
    }

    /// Writes the full line sequence to the slot.
    pub async fn save(&self, lines: &[CartLine]) {
        let json = match serde_json::to_string(lines) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.kv.set(CART_SLOT_KEY, &json).await {
            error!(error = %e, "Failed to save cart slot");
        }
    }

    /// Reads the line sequence back from the slot.
    ///
    /// An absent slot, a read failure, or corrupt JSON all yield the empty
    /// sequence.
    pub async fn load(&self) -> Vec<CartLine> {
        let stored = match self.kv.get(CART_SLOT_KEY).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Failed to read cart slot, starting empty");
                return Vec::new();
            }
        };

        match stored {
            Some(json) => match serde_json::from_str(&json) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!(error = %e, "Cart slot held corrupt JSON, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    }

    /// Deletes the slot.
    pub async fn clear(&self) {
        if let Err(e) = self.kv.remove(CART_SLOT_KEY).await {
            error!(error = %e, "Failed to clear cart slot");
        }
    }

    /// Checks whether the slot currently holds anything.
    pub async fn is_present(&self) -> bool {
        matches!(self.kv.get(CART_SLOT_KEY).await, Ok(Some(_)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use matjip_core::money::Won;
    use matjip_core::types::{Dish, DishData, DishTags, Topping};
    use matjip_core::Cart;

    async fn cart_store() -> CartStore {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        CartStore::new(store.kv())
    }

    fn dish(id: i64, name: &str, price: i64) -> Dish {
        Dish {
            id,
            dish_data: DishData {
                name: name.to_string(),
                description: String::new(),
                image: "/images/home.png".to_string(),
                ingredients: Vec::new(),
                price: Won::from_won(price),
                toppings: Vec::new(),
                tag: vec![DishTags::default()],
                kind: "찌개".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_load_absent_slot_is_empty() {
        let cart_store = cart_store().await;
        assert!(cart_store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let cart_store = cart_store().await;

        let mut cart = Cart::new();
        cart.add(
            &dish(1, "김치찌개", 8000),
            &[Topping {
                name: "치즈".to_string(),
                price: Won::from_won(1000),
            }],
        );
        cart.add(&dish(2, "불고기", 15000), &[]);
        cart.update_quantity(0, 3).unwrap();

        cart_store.save(cart.lines()).await;
        let restored = Cart::from_lines(cart_store.load().await);

        assert_eq!(restored, cart);
        assert_eq!(restored.total_price(), Won::from_won(42_000));
    }

    #[tokio::test]
    async fn test_corrupt_slot_degrades_to_empty() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let cart_store = CartStore::new(store.kv());

        store
            .kv()
            .set(CART_SLOT_KEY, "{not json at all")
            .await
            .unwrap();

        assert!(cart_store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_slot() {
        let cart_store = cart_store().await;

        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000), &[]);
        cart_store.save(cart.lines()).await;
        assert!(cart_store.is_present().await);

        cart_store.clear().await;
        assert!(!cart_store.is_present().await);
        assert!(cart_store.load().await.is_empty());
    }
}
