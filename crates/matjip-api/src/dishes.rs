//! # Dish Catalog Source
//!
//! One injectable abstraction over the dish catalog with two
//! implementations: the remote backend and an in-memory fixture. The choice
//! happens once, at construction time — nothing downstream branches on
//! connectivity per call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            select_dish_source(ctx)   (probe once)                   │
//! │                   │                                                 │
//! │        GET /dish reachable?                                         │
//! │          yes │          │ no                                        │
//! │              ▼          ▼                                           │
//! │   RemoteDishSource   FixtureDishSource (seeded demo menu)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::context::{ensure_success, RequestContext};
use crate::error::{ApiError, ApiResult};
use crate::fixtures;
use matjip_core::types::{Dish, DishData};

// =============================================================================
// Trait
// =============================================================================

/// Read/write access to the dish catalog.
#[async_trait]
pub trait DishSource: Send + Sync {
    /// Fetches the whole catalog.
    async fn fetch_dishes(&self) -> ApiResult<Vec<Dish>>;

    /// Creates a dish and returns it with its assigned id.
    async fn create_dish(&self, dish_data: DishData) -> ApiResult<Dish>;

    /// Replaces the payload of an existing dish.
    async fn update_dish(&self, id: i64, dish_data: DishData) -> ApiResult<Dish>;

    /// Deletes a dish.
    async fn delete_dish(&self, id: i64) -> ApiResult<()>;
}

// =============================================================================
// Remote Implementation
// =============================================================================

/// Catalog access over the backend REST endpoints.
#[derive(Debug, Clone)]
pub struct RemoteDishSource {
    ctx: RequestContext,
}

impl RemoteDishSource {
    pub fn new(ctx: RequestContext) -> Self {
        RemoteDishSource { ctx }
    }
}

#[async_trait]
impl DishSource for RemoteDishSource {
    async fn fetch_dishes(&self) -> ApiResult<Vec<Dish>> {
        debug!("Fetching dish catalog");
        let response = ensure_success(self.ctx.get("/dish").send().await?)?;
        Ok(response.json().await?)
    }

    async fn create_dish(&self, dish_data: DishData) -> ApiResult<Dish> {
        debug!(name = %dish_data.name, "Creating dish");
        let response =
            ensure_success(self.ctx.post("/dish").json(&dish_data).send().await?)?;
        Ok(response.json().await?)
    }

    async fn update_dish(&self, id: i64, dish_data: DishData) -> ApiResult<Dish> {
        debug!(id, "Updating dish");
        let response = ensure_success(
            self.ctx
                .put(&format!("/dish/{}", id))
                .json(&dish_data)
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    async fn delete_dish(&self, id: i64) -> ApiResult<()> {
        debug!(id, "Deleting dish");
        ensure_success(self.ctx.delete(&format!("/dish/{}", id)).send().await?)?;
        Ok(())
    }
}

// =============================================================================
// Fixture Implementation
// =============================================================================

/// In-memory catalog seeded with the demo menu.
///
/// Id allocation matches the backend: `max(existing) + 1`.
#[derive(Debug)]
pub struct FixtureDishSource {
    dishes: Mutex<Vec<Dish>>,
}

impl FixtureDishSource {
    /// Creates a fixture seeded with the demo menu.
    pub fn new() -> Self {
        FixtureDishSource {
            dishes: Mutex::new(fixtures::seed_dishes()),
        }
    }

    /// Creates a fixture over an arbitrary catalog.
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        FixtureDishSource {
            dishes: Mutex::new(dishes),
        }
    }
}

impl Default for FixtureDishSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DishSource for FixtureDishSource {
    async fn fetch_dishes(&self) -> ApiResult<Vec<Dish>> {
        Ok(self.dishes.lock().expect("dish catalog mutex poisoned").clone())
    }

    async fn create_dish(&self, dish_data: DishData) -> ApiResult<Dish> {
        let mut dishes = self.dishes.lock().expect("dish catalog mutex poisoned");
        let id = dishes.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let dish = Dish { id, dish_data };
        dishes.push(dish.clone());
        Ok(dish)
    }

    async fn update_dish(&self, id: i64, dish_data: DishData) -> ApiResult<Dish> {
        let mut dishes = self.dishes.lock().expect("dish catalog mutex poisoned");
        let slot = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ApiError::rejected(format!("메뉴 {}를 찾을 수 없습니다.", id)))?;
        slot.dish_data = dish_data;
        Ok(slot.clone())
    }

    async fn delete_dish(&self, id: i64) -> ApiResult<()> {
        let mut dishes = self.dishes.lock().expect("dish catalog mutex poisoned");
        let before = dishes.len();
        dishes.retain(|d| d.id != id);
        if dishes.len() == before {
            return Err(ApiError::rejected(format!(
                "메뉴 {}를 찾을 수 없습니다.",
                id
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Source Selection
// =============================================================================

/// Probes the backend once and returns the catalog source to use for the
/// rest of the session.
pub async fn select_dish_source(ctx: &RequestContext) -> Arc<dyn DishSource> {
    match ctx.get("/dish").send().await {
        Ok(response) if response.status().is_success() => {
            debug!("Backend reachable, using remote dish source");
            Arc::new(RemoteDishSource::new(ctx.clone()))
        }
        Ok(response) => {
            warn!(
                status = response.status().as_u16(),
                "Backend answered abnormally, using fixture dish source"
            );
            Arc::new(FixtureDishSource::new())
        }
        Err(e) => {
            warn!(error = %e, "Backend unreachable, using fixture dish source");
            Arc::new(FixtureDishSource::new())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
