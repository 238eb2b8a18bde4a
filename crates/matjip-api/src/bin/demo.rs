//! # Demo Flow
//!
//! Drives the whole ordering path end to end: select a dish source (remote
//! if a backend answers, fixture otherwise), open a session over an
//! in-memory store, fill the cart, reopen to prove persistence, submit.
//!
//! ## Usage
//! ```bash
//! cargo run -p matjip-api --bin demo
//!
//! # Against a running backend
//! MATJIP_API_BASE_URL=http://localhost:3000 cargo run -p matjip-api --bin demo
//! ```

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use matjip_api::{
    select_dish_source, ApiConfig, FixtureOrderEndpoint, OrderEndpoint, OrderSession,
    RequestContext,
};
use matjip_store::{CartStore, Store, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::from_env()?;
    info!(base_url = %config.base_url, "Starting demo flow");

    let ctx = RequestContext::new(&config)?;
    let source = select_dish_source(&ctx).await;

    let dishes = source.fetch_dishes().await?;
    info!(count = dishes.len(), "Fetched dish catalog");
    for dish in &dishes {
        info!(id = dish.id, name = %dish.name(), price = %dish.price(), "  menu entry");
    }

    let Some(first) = dishes.first() else {
        warn!("Catalog is empty, nothing to order");
        return Ok(());
    };

    let store = Store::new(StoreConfig::in_memory()).await?;
    let cart_store = CartStore::new(store.kv());
    let endpoint: Arc<FixtureOrderEndpoint> = Arc::new(FixtureOrderEndpoint::new());
    let orders: Arc<dyn OrderEndpoint> = endpoint.clone();

    let mut session = OrderSession::open(cart_store.clone(), orders.clone()).await;
    session.add_to_cart(first, &first.dish_data.toppings).await;
    session.add_to_cart(first, &first.dish_data.toppings).await;
    if let Some(second) = dishes.get(1) {
        session.add_to_cart(second, &[]).await;
    }
    info!(lines = session.cart().len(), total = %session.total_price(), "Cart assembled");

    // Prove the slot round-trip: a fresh session sees the same cart.
    let mut session = OrderSession::open(cart_store, orders).await;
    info!(lines = session.cart().len(), total = %session.total_price(), "Cart rehydrated from slot");

    let outcome = session.submit_order().await?;
    info!(?outcome, placed = endpoint.placed().len(), "Order submitted");
    info!(empty = session.cart().is_empty(), "Cart after submission");

    Ok(())
}
