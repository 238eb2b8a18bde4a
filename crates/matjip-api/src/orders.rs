//! # Order Endpoint
//!
//! The checkout boundary: a cart's order payload goes out, a success or
//! failure comes back. The session layer above decides what a failure means
//! (see `session.rs` — it simulates success to keep the demo flow alive).

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::context::{ensure_success, RequestContext};
use crate::error::ApiResult;
use matjip_core::types::OrderItem;

// =============================================================================
// Trait
// =============================================================================

/// Where submitted orders go.
#[async_trait]
pub trait OrderEndpoint: Send + Sync {
    /// Sends an order payload to the kitchen.
    async fn place_order(&self, items: &[OrderItem]) -> ApiResult<()>;
}

// =============================================================================
// Remote Implementation
// =============================================================================

/// Checkout over the backend REST endpoint.
#[derive(Debug, Clone)]
pub struct RemoteOrderEndpoint {
    ctx: RequestContext,
}

impl RemoteOrderEndpoint {
    pub fn new(ctx: RequestContext) -> Self {
        RemoteOrderEndpoint { ctx }
    }
}

#[async_trait]
impl OrderEndpoint for RemoteOrderEndpoint {
    async fn place_order(&self, items: &[OrderItem]) -> ApiResult<()> {
        debug!(lines = items.len(), "Placing order");
        ensure_success(self.ctx.post("/dish/order").json(items).send().await?)?;
        Ok(())
    }
}

// =============================================================================
// Fixture Implementation
// =============================================================================

/// Records every placed order in memory and always succeeds.
#[derive(Debug, Default)]
pub struct FixtureOrderEndpoint {
    placed: Mutex<Vec<Vec<OrderItem>>>,
}

impl FixtureOrderEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every payload placed so far (oldest first).
    pub fn placed(&self) -> Vec<Vec<OrderItem>> {
        self.placed.lock().expect("order log mutex poisoned").clone()
    }
}

#[async_trait]
impl OrderEndpoint for FixtureOrderEndpoint {
    async fn place_order(&self, items: &[OrderItem]) -> ApiResult<()> {
        debug!(lines = items.len(), "Recording fixture order");
        self.placed
            .lock()
            .expect("order log mutex poisoned")
            .push(items.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use matjip_core::money::Won;
    use matjip_core::types::Topping;

    #[tokio::test]
    async fn test_fixture_records_payloads() {
        let endpoint = FixtureOrderEndpoint::new();
        let payload = vec![OrderItem {
            name: "김치찌개".to_string(),
            toppings: vec![Topping {
                name: "치즈".to_string(),
                price: Won::from_won(1000),
            }],
        }];

        endpoint.place_order(&payload).await.unwrap();
        endpoint.place_order(&payload).await.unwrap();

        let placed = endpoint.placed();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0], payload);
    }
}
