//! # Key-Value Slot Repository
//!
//! Database operations for the `kv_slots` table: a flat string-to-string
//! store where each slot holds one JSON document. The cart slot is the main
//! tenant; the fixture blob backend may park data URLs here too.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;

/// Repository for key-value slot operations.
///
/// ## Usage
/// ```rust,ignore
/// let kv = store.kv();
/// kv.set("dish-order-cart", "[]").await?;
/// let value = kv.get("dish-order-cart").await?;
/// kv.remove("dish-order-cart").await?;
/// ```
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Reads a slot. Returns `None` when the slot is absent.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        debug!(key = %key, "kv get");

        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_slots WHERE slot_key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes a slot, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, len = value.len(), "kv set");

        sqlx::query(
            r#"
            INSERT INTO kv_slots (slot_key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(slot_key) DO UPDATE
                SET value = excluded.value,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a slot. Deleting an absent slot is not an error.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        debug!(key = %key, "kv remove");

        sqlx::query("DELETE FROM kv_slots WHERE slot_key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Store, StoreConfig};

    #[tokio::test]
    async fn test_get_absent_slot() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        assert_eq!(store.kv().get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let kv = store.kv();

        kv.set("slot", "{\"a\":1}").await.unwrap();
        assert_eq!(kv.get("slot").await.unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let kv = store.kv();

        kv.set("slot", "old").await.unwrap();
        kv.set("slot", "new").await.unwrap();
        assert_eq!(kv.get("slot").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let kv = store.kv();

        kv.set("slot", "value").await.unwrap();
        kv.remove("slot").await.unwrap();
        assert_eq!(kv.get("slot").await.unwrap(), None);

        // Removing again is fine.
        kv.remove("slot").await.unwrap();
    }
}
