//! # JSON File Persistence
//!
//! Serializes fully-computed orders to pretty-printed JSON files.
//!
//! ## File Layout
//! ```text
//! <output_dir>/order-1001.json
//! {
//!   "order_number": 1001,
//!   "customer_name": "John Doe",
//!   "customer_phone": "123-456-7890",
//!   "created_at": "2026-08-30T12:00:00Z",
//!   "items": [ { "line_number": 1, "category_code": "ELECT001", ... } ],
//!   "tax_amount": 50.0,
//!   "tariff_amount": 15.0,
//!   "total_amount": 565.0
//! }
//! ```
//!
//! Field naming and nesting follow the serde derives on the core types:
//! the full order is written, items and all derived monetary fields
//! included.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use tally_core::Order;

/// Writes orders as JSON files into a target directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    output_dir: PathBuf,
}

impl JsonStore {
    /// Creates a JSON store writing into the given directory.
    ///
    /// The directory is created on the first save if it doesn't exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        JsonStore {
            output_dir: output_dir.into(),
        }
    }

    /// Saves the order as `order-<order_number>.json`.
    ///
    /// Accept-or-fail: an existing file for the same order number is
    /// overwritten.
    ///
    /// ## Returns
    /// The path of the written file.
    pub async fn save(&self, order: &Order) -> StoreResult<PathBuf> {
        let path = self.file_path(order.order_number);
        debug!(
            order_number = order.order_number,
            path = %path.display(),
            "Writing order JSON"
        );

        let payload = serde_json::to_string_pretty(order)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, payload).await?;

        Ok(path)
    }

    /// The file path an order would be written to.
    pub fn file_path(&self, order_number: u32) -> PathBuf {
        self.output_dir.join(format!("order-{}.json", order_number))
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::LineItem;
    use uuid::Uuid;

    fn temp_output_dir() -> PathBuf {
        std::env::temp_dir().join(format!("tally-json-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_save_writes_full_order() {
        let store = JsonStore::new(temp_output_dir());

        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(LineItem::new(1001, 1, "ELECT001", "42 Inch TV", 100.0, 2));
        order.compute_totals();

        let path = store.save(&order).await.unwrap();
        assert_eq!(path, store.file_path(1001));

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();

        assert_eq!(value["order_number"], 1001);
        assert_eq!(value["customer_name"], "John Doe");
        assert_eq!(value["items"][0]["category_code"], "ELECT001");
        assert_eq!(value["tax_amount"], 20.0);
        assert_eq!(value["tariff_amount"], 10.0);
        assert_eq!(value["total_amount"], 230.0);

        tokio::fs::remove_dir_all(store.output_dir()).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let store = JsonStore::new(temp_output_dir());

        let mut order = Order::new(1002, "Jane Smith", "987-654-3210");
        order.compute_totals();
        store.save(&order).await.unwrap();

        order.add_item(LineItem::new(1002, 1, "OTHER001", "Chair", 50.0, 3));
        order.compute_totals();
        let path = store.save(&order).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["total_amount"], 165.0);

        tokio::fs::remove_dir_all(store.output_dir()).await.unwrap();
    }
}
