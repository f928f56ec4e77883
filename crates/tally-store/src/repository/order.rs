//! # Order Repository
//!
//! Database operations for orders and their line items.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Order Persistence                               │
//! │                                                                     │
//! │  1. INSERT (accept-or-fail)                                         │
//! │     └── insert(&order) → order row + item rows in ONE transaction   │
//! │         The order arrives fully computed; the repository stores     │
//! │         the derived fields verbatim and recomputes nothing.         │
//! │                                                                     │
//! │  2. REHYDRATE                                                       │
//! │     └── get_by_id(number) → Order with its items, ordered by        │
//! │         line number                                                 │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use tally_core::{LineItem, Order};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

/// Row mapping for the `orders` table.
#[derive(sqlx::FromRow)]
struct OrderRow {
    order_number: i64,
    customer_name: String,
    customer_phone: String,
    created_at: DateTime<Utc>,
    tax_amount: f64,
    tariff_amount: f64,
    total_amount: f64,
}

/// Row mapping for the `order_items` table.
#[derive(sqlx::FromRow)]
struct ItemRow {
    order_number: i64,
    line_number: i64,
    category_code: String,
    name: String,
    unit_price: f64,
    quantity: i64,
}

impl ItemRow {
    fn into_item(self) -> LineItem {
        LineItem {
            order_number: self.order_number as u32,
            line_number: self.line_number as u32,
            category_code: self.category_code,
            name: self.name,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts a fully-computed order and all of its line items.
    ///
    /// ## Transaction Boundary
    /// The order row and every item row commit together; a failure on any
    /// item rolls the whole order back (accept-or-fail).
    pub async fn insert(&self, order: &Order) -> StoreResult<()> {
        debug!(
            order_number = order.order_number,
            items = order.items.len(),
            total = order.total_amount,
            "Inserting order"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_number, customer_name, customer_phone, created_at,
                tax_amount, tariff_amount, total_amount
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(order.order_number as i64)
        .bind(&order.customer_name)
        .bind(&order.customer_phone)
        .bind(order.created_at)
        .bind(order.tax_amount)
        .bind(order.tariff_amount)
        .bind(order.total_amount)
        .execute(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_number, line_number, category_code, name,
                    unit_price, quantity
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(item.order_number as i64)
            .bind(item.line_number as i64)
            .bind(&item.category_code)
            .bind(&item.name)
            .bind(item.unit_price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Gets an order by its order number, with all of its line items.
    pub async fn get_by_id(&self, order_number: u32) -> StoreResult<Option<Order>> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT
                order_number, customer_name, customer_phone, created_at,
                tax_amount, tariff_amount, total_amount
            FROM orders
            WHERE order_number = ?1
            "#,
        )
        .bind(order_number as i64)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT
                order_number, line_number, category_code, name,
                unit_price, quantity
            FROM order_items
            WHERE order_number = ?1
            ORDER BY line_number
            "#,
        )
        .bind(order_number as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Order {
            order_number: row.order_number as u32,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            created_at: row.created_at,
            items: items.into_iter().map(ItemRow::into_item).collect(),
            tax_amount: row.tax_amount,
            tariff_amount: row.tariff_amount,
            total_amount: row.total_amount,
        }))
    }

    /// Counts the stored orders.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::error::StoreError;

    fn sample_order() -> Order {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(LineItem::new(1001, 1, "ELECT001", "42 Inch TV", 300.0, 1));
        order.add_item(LineItem::new(1001, 2, "OTHER001", "Office Chair", 100.0, 2));
        order.compute_totals();
        order
    }

    #[tokio::test]
    async fn test_insert_and_rehydrate_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let order = sample_order();

        db.orders().insert(&order).await.unwrap();

        let loaded = db.orders().get_by_id(1001).await.unwrap().unwrap();
        assert_eq!(loaded.order_number, 1001);
        assert_eq!(loaded.customer_name, "John Doe");
        assert_eq!(loaded.items.len(), 2);
        assert_eq!(loaded.items[0].category_code, "ELECT001");
        assert_eq!(loaded.items[1].line_number, 2);
        // Derived fields are stored verbatim:
        // subtotal 500 + tax 50 + tariff 15 = 565
        assert_eq!(loaded.tax_amount, 50.0);
        assert_eq!(loaded.tariff_amount, 15.0);
        assert_eq!(loaded.total_amount, 565.0);
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.orders().get_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_order_number_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let order = sample_order();

        db.orders().insert(&order).await.unwrap();
        let err = db.orders().insert(&order).await.unwrap_err();

        assert!(matches!(err, StoreError::UniqueViolation { .. }));
        assert_eq!(db.orders().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_order_round_trips() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut order = Order::new(1002, "Jane Smith", "987-654-3210");
        order.compute_totals();

        db.orders().insert(&order).await.unwrap();

        let loaded = db.orders().get_by_id(1002).await.unwrap().unwrap();
        assert!(loaded.items.is_empty());
        assert_eq!(loaded.total_amount, 0.0);
    }
}
