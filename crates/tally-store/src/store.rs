//! # Save-Target Routing
//!
//! Routes a fully-computed order to one of the two persistence
//! collaborators.
//!
//! ## Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   OrderStore::save(order, target)                   │
//! │                                                                     │
//! │          SaveTarget::Database ──► OrderRepository::insert           │
//! │  order ──┤                                                          │
//! │          SaveTarget::Json ──────► JsonStore::save                   │
//! │                                                                     │
//! │  Anything else never reaches save(): parsing an unrecognized        │
//! │  target string fails up front with StoreError::InvalidTarget.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The routing itself contains no persistence logic; each collaborator
//! fails independently of pricing and of the other target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::json::JsonStore;
use crate::pool::Database;
use tally_core::Order;

// =============================================================================
// Save Target
// =============================================================================

/// The persistence target for an order.
///
/// A closed set of two variants; unrecognized target strings fail at parse
/// time with [`StoreError::InvalidTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveTarget {
    /// Save to the SQLite database.
    Database,
    /// Save to a JSON file.
    Json,
}

impl FromStr for SaveTarget {
    type Err = StoreError;

    /// Parses the wire spelling of a target: `"Database"` or `"JSON"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Database" => Ok(SaveTarget::Database),
            "JSON" => Ok(SaveTarget::Json),
            other => Err(StoreError::invalid_target(other)),
        }
    }
}

impl fmt::Display for SaveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveTarget::Database => write!(f, "Database"),
            SaveTarget::Json => write!(f, "JSON"),
        }
    }
}

// =============================================================================
// Order Store
// =============================================================================

/// Facade over both persistence collaborators with target routing.
#[derive(Debug, Clone)]
pub struct OrderStore {
    db: Database,
    json: JsonStore,
}

impl OrderStore {
    /// Creates an order store over a database handle and a JSON store.
    pub fn new(db: Database, json: JsonStore) -> Self {
        OrderStore { db, json }
    }

    /// Saves the order to the selected target.
    ///
    /// Pure routing: dispatches to the database repository or the JSON
    /// writer and propagates their accept-or-fail result.
    pub async fn save(&self, order: &Order, target: SaveTarget) -> StoreResult<()> {
        match target {
            SaveTarget::Database => self.db.orders().insert(order).await?,
            SaveTarget::Json => {
                self.json.save(order).await?;
            }
        }

        info!(
            order_number = order.order_number,
            target = %target,
            "Order saved"
        );
        Ok(())
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The underlying JSON store.
    pub fn json(&self) -> &JsonStore {
        &self.json
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use std::path::PathBuf;
    use tally_core::LineItem;
    use uuid::Uuid;

    fn temp_output_dir() -> PathBuf {
        std::env::temp_dir().join(format!("tally-store-{}", Uuid::new_v4()))
    }

    fn sample_order() -> Order {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(LineItem::new(1001, 1, "ELECT001", "42 Inch TV", 300.0, 1));
        order.compute_totals();
        order
    }

    #[test]
    fn test_parse_recognized_targets() {
        assert_eq!("Database".parse::<SaveTarget>().unwrap(), SaveTarget::Database);
        assert_eq!("JSON".parse::<SaveTarget>().unwrap(), SaveTarget::Json);
    }

    #[test]
    fn test_parse_unknown_target_fails() {
        let err = "Unknown".parse::<SaveTarget>().unwrap_err();
        match err {
            StoreError::InvalidTarget { target } => assert_eq!(target, "Unknown"),
            other => panic!("expected InvalidTarget, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("database".parse::<SaveTarget>().is_err());
        assert!("json".parse::<SaveTarget>().is_err());
    }

    #[tokio::test]
    async fn test_save_routes_to_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = OrderStore::new(db, JsonStore::new(temp_output_dir()));

        store
            .save(&sample_order(), SaveTarget::Database)
            .await
            .unwrap();

        assert_eq!(store.database().orders().count().await.unwrap(), 1);
        // Nothing was written to the JSON side
        assert!(!store.json().file_path(1001).exists());
    }

    #[tokio::test]
    async fn test_save_routes_to_json() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = OrderStore::new(db, JsonStore::new(temp_output_dir()));

        store.save(&sample_order(), SaveTarget::Json).await.unwrap();

        assert!(store.json().file_path(1001).exists());
        // Nothing was written to the database side
        assert_eq!(store.database().orders().count().await.unwrap(), 0);

        tokio::fs::remove_dir_all(store.json().output_dir())
            .await
            .unwrap();
    }
}
