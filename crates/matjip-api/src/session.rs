//! # Order Session
//!
//! Ties the cart, its persistence slot, and the checkout endpoint together
//! for the lifetime of one ordering session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  open()            rehydrate cart from the 'dish-order-cart' slot   │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  add_to_cart / update_quantity / remove_from_cart                   │
//! │     │          every mutation mirrors the cart back to the slot     │
//! │     ▼                                                               │
//! │  submit_order()                                                     │
//! │     ├── endpoint Ok   → OrderOutcome::Placed                        │
//! │     └── endpoint Err  → OrderOutcome::SimulatedPlaced (warn-logged) │
//! │                either way: cart cleared, slot removed               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed submission is deliberately reported as a simulated success: the
//! tableside flow must stay usable with no backend, and no retry is ever
//! attempted. One outstanding submission at a time (`&mut self` enforces
//! it); the session is the cart's single owner, so there is no lock.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::ApiResult;
use crate::orders::OrderEndpoint;
use matjip_core::cart::Cart;
use matjip_core::error::{CoreError, CoreResult};
use matjip_core::money::Won;
use matjip_core::types::{Dish, OrderItem, Topping};
use matjip_store::CartStore;

// =============================================================================
// Order Outcome
// =============================================================================

/// How a submission completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The kitchen endpoint accepted the order.
    Placed,
    /// The endpoint failed; the order was treated as placed anyway.
    SimulatedPlaced,
}

// =============================================================================
// Order Session
// =============================================================================

/// One customer's ordering session: cart + slot + checkout endpoint.
pub struct OrderSession {
    cart: Cart,
    store: CartStore,
    orders: Arc<dyn OrderEndpoint>,
}

impl OrderSession {
    /// Opens a session, rehydrating the cart from its slot.
    pub async fn open(store: CartStore, orders: Arc<dyn OrderEndpoint>) -> Self {
        let cart = Cart::from_lines(store.load().await);
        debug!(lines = cart.len(), "Order session opened");
        OrderSession { cart, store, orders }
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of a dish with the given topping selection and mirrors
    /// the cart to its slot.
    pub async fn add_to_cart(&mut self, dish: &Dish, toppings: &[Topping]) {
        self.cart.add(dish, toppings);
        self.persist().await;
    }

    /// Sets a line's quantity (`<= 0` removes the line) and mirrors the cart
    /// to its slot.
    pub async fn update_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        self.cart.update_quantity(index, quantity)?;
        self.persist().await;
        Ok(())
    }

    /// Removes a line and mirrors the cart to its slot.
    pub async fn remove_from_cart(&mut self, index: usize) -> CoreResult<()> {
        self.cart.remove(index)?;
        self.persist().await;
        Ok(())
    }

    /// Current cart total.
    pub fn total_price(&self) -> Won {
        self.cart.total_price()
    }

    /// Submits the cart as an order.
    ///
    /// On endpoint success **or** endpoint failure, the cart and its slot
    /// are cleared and the submission reports completion; a failure only
    /// downgrades the outcome to [`OrderOutcome::SimulatedPlaced`]. The one
    /// real error is submitting an empty cart.
    pub async fn submit_order(&mut self) -> ApiResult<OrderOutcome> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let items: Vec<OrderItem> = self.cart.order_items();
        let outcome = match self.orders.place_order(&items).await {
            Ok(()) => {
                info!(lines = items.len(), "Order placed");
                OrderOutcome::Placed
            }
            Err(e) => {
                warn!(error = %e, "Order endpoint failed, simulating placement");
                OrderOutcome::SimulatedPlaced
            }
        };

        self.cart.clear();
        self.store.clear().await;
        Ok(outcome)
    }

    async fn persist(&self) {
        self.store.save(self.cart.lines()).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::fixtures::seed_dishes;
    use crate::orders::FixtureOrderEndpoint;
    use async_trait::async_trait;
    use matjip_store::{Store, StoreConfig};

    /// Endpoint that refuses every order, for the degraded path.
    struct DownOrderEndpoint;

    #[async_trait]
    impl OrderEndpoint for DownOrderEndpoint {
        async fn place_order(&self, _items: &[OrderItem]) -> ApiResult<()> {
            Err(ApiError::Status { status: 503 })
        }
    }

    async fn cart_store() -> CartStore {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        CartStore::new(store.kv())
    }

    #[tokio::test]
    async fn test_mutations_mirror_to_slot() {
        let store = cart_store().await;
        let endpoint = Arc::new(FixtureOrderEndpoint::new());
        let dishes = seed_dishes();

        let mut session = OrderSession::open(store.clone(), endpoint.clone()).await;
        session.add_to_cart(&dishes[0], &dishes[0].dish_data.toppings).await;
        session.add_to_cart(&dishes[1], &[]).await;
        session.update_quantity(1, 3).await.unwrap();

        // A fresh session over the same slot sees the same cart.
        let reopened = OrderSession::open(store, endpoint).await;
        assert_eq!(reopened.cart(), session.cart());
        assert_eq!(reopened.cart().len(), 2);
        assert_eq!(reopened.cart().lines()[1].quantity, 3);
    }

    #[tokio::test]
    async fn test_total_price_passthrough() {
        let store = cart_store().await;
        let endpoint = Arc::new(FixtureOrderEndpoint::new());
        let dishes = seed_dishes();

        let mut session = OrderSession::open(store, endpoint).await;
        // 김치찌개 8000 + 치즈 1000 + 라면사리 1500, twice
        session.add_to_cart(&dishes[0], &dishes[0].dish_data.toppings).await;
        session.add_to_cart(&dishes[0], &dishes[0].dish_data.toppings).await;

        assert_eq!(session.total_price(), Won::from_won(21_000));
    }

    #[tokio::test]
    async fn test_submit_clears_cart_and_slot() {
        let store = cart_store().await;
        let endpoint = Arc::new(FixtureOrderEndpoint::new());
        let dishes = seed_dishes();

        let mut session = OrderSession::open(store.clone(), endpoint.clone()).await;
        session.add_to_cart(&dishes[0], &[]).await;
        session.add_to_cart(&dishes[0], &[]).await;

        let outcome = session.submit_order().await.unwrap();
        assert_eq!(outcome, OrderOutcome::Placed);
        assert!(session.cart().is_empty());
        assert!(!store.is_present().await);

        // One payload entry for the merged line, quantity not expanded.
        let placed = endpoint.placed();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].len(), 1);
        assert_eq!(placed[0][0].name, "김치찌개");
    }

    #[tokio::test]
    async fn test_submit_with_endpoint_down_simulates_success() {
        let store = cart_store().await;
        let dishes = seed_dishes();

        let mut session = OrderSession::open(store.clone(), Arc::new(DownOrderEndpoint)).await;
        session.add_to_cart(&dishes[2], &[]).await;

        let outcome = session.submit_order().await.unwrap();
        assert_eq!(outcome, OrderOutcome::SimulatedPlaced);
        // Degraded path still completes the session.
        assert!(session.cart().is_empty());
        assert!(!store.is_present().await);
    }

    #[tokio::test]
    async fn test_submit_empty_cart_errors() {
        let store = cart_store().await;
        let mut session =
            OrderSession::open(store, Arc::new(FixtureOrderEndpoint::new())).await;

        let err = session.submit_order().await.unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::EmptyCart)));
    }
}
