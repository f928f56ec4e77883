//! # Domain Types
//!
//! Core domain types for Tally Orders.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────────┐          ┌────────────────────┐             │
//! │  │       Order        │ 1 ──── * │      LineItem      │             │
//! │  │  ────────────────  │          │  ────────────────  │             │
//! │  │  order_number      │          │  order_number      │             │
//! │  │  customer_name     │          │  line_number       │             │
//! │  │  customer_phone    │          │  category_code     │             │
//! │  │  created_at        │          │  name              │             │
//! │  │  items             │          │  unit_price        │             │
//! │  │  tax_amount*       │          │  quantity          │             │
//! │  │  tariff_amount*    │          └────────────────────┘             │
//! │  │  total_amount*     │                                             │
//! │  └────────────────────┘   * derived, recomputed by compute_totals   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! An Order exclusively owns its LineItems. Items are appended by the caller
//! and never shared across orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing;

// =============================================================================
// Line Item
// =============================================================================

/// One purchasable entry in an order.
///
/// Plain value record: identity and numbering are assigned by the caller,
/// not generated here. Classification as tariffable is derived from the
/// category code prefix, never stored as a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The order number this item belongs to (caller-assigned).
    pub order_number: u32,

    /// Unique line number within the order. Starts at 1 and increments for
    /// each item. Assigned by the caller; uniqueness is not enforced here.
    pub line_number: u32,

    /// Category code of the stocked item (e.g. ELECT001 for electronics).
    pub category_code: String,

    /// The name or description of the item.
    pub name: String,

    /// The price per unit of the item.
    pub unit_price: f64,

    /// The quantity ordered. Zero is legal and contributes nothing.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(
        order_number: u32,
        line_number: u32,
        category_code: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) -> Self {
        LineItem {
            order_number,
            line_number,
            category_code: category_code.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Checks whether this item is subject to the import tariff.
    ///
    /// True iff the category code starts with the literal `"ELECT"` prefix.
    /// Case-sensitive, exact prefix match, no normalization. An empty
    /// category code trivially fails the match.
    #[inline]
    pub fn is_tariffable(&self) -> bool {
        self.category_code
            .starts_with(pricing::TARIFF_CATEGORY_PREFIX)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's order: line items plus customer identity and derived
/// monetary totals.
///
/// ## Lifecycle
/// ```text
/// Order::new() ──► add_item() × N ──► compute_totals() ──► persist (store)
///                      ▲                    │
///                      └────────────────────┘
///            safe to keep adding and recomputing; each call
///            recomputes all derived fields from scratch
/// ```
///
/// ## Derived Fields
/// `tax_amount`, `tariff_amount`, and `total_amount` are 0.0 until the first
/// [`Order::compute_totals`] call and are overwritten in full on every call.
/// They are never accumulated across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned order identifier. Uniqueness across orders is the
    /// surrounding system's concern, not enforced here.
    pub order_number: u32,

    /// Name of the purchaser. Required for business validation, not for
    /// total computation.
    pub customer_name: String,

    /// Phone number of the purchaser.
    pub customer_phone: String,

    /// When the order was created.
    pub created_at: DateTime<Utc>,

    /// Line items, in insertion order. Append-only.
    pub items: Vec<LineItem>,

    /// Flat 10% sales tax on the subtotal. Derived.
    pub tax_amount: f64,

    /// 5% import tariff on electronics line totals. Derived.
    pub tariff_amount: f64,

    /// Subtotal + tax + tariff. Derived.
    pub total_amount: f64,
}

impl Order {
    /// Creates a new empty order with zeroed derived fields.
    pub fn new(
        order_number: u32,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
    ) -> Self {
        Order {
            order_number,
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            created_at: Utc::now(),
            items: Vec::new(),
            tax_amount: 0.0,
            tariff_amount: 0.0,
            total_amount: 0.0,
        }
    }

    /// Appends an item to the order.
    ///
    /// Pure append: no uniqueness check on line numbers, no bounds, no
    /// error conditions. O(1) amortized.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Calculates the subtotal (Σ unit price × quantity), before tax and
    /// tariff. Always derived from the current items, never stored.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Computes the total amount for the order, including:
    /// - Subtotal of all items
    /// - Tax (10% of the subtotal)
    /// - Tariff (5% for electronics category codes starting with `ELECT`)
    ///
    /// Overwrites `tax_amount`, `tariff_amount`, and `total_amount` in place.
    /// Idempotent and total: never fails, including for empty orders and
    /// zero-quantity items. Safe to call again after adding more items.
    pub fn compute_totals(&mut self) {
        let totals = pricing::price_items(&self.items);
        self.tax_amount = totals.tax_amount;
        self.tariff_amount = totals.tariff_amount;
        self.total_amount = totals.total_amount;
    }

    /// Checks if the order has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn electronics_item(price: f64, qty: i64) -> LineItem {
        LineItem::new(1001, 1, "ELECT001", "42 Inch TV", price, qty)
    }

    #[test]
    fn test_is_tariffable_prefix_match() {
        assert!(electronics_item(100.0, 1).is_tariffable());

        let other = LineItem::new(1001, 2, "OTHER001", "Office Chair", 50.0, 1);
        assert!(!other.is_tariffable());
    }

    #[test]
    fn test_is_tariffable_is_case_sensitive() {
        let lower = LineItem::new(1001, 1, "elect001", "TV", 100.0, 1);
        assert!(!lower.is_tariffable());
    }

    #[test]
    fn test_is_tariffable_empty_category_code() {
        let blank = LineItem::new(1001, 1, "", "Mystery Box", 10.0, 1);
        assert!(!blank.is_tariffable());
    }

    #[test]
    fn test_line_total() {
        assert_eq!(electronics_item(100.0, 2).line_total(), 200.0);
        assert_eq!(electronics_item(150.0, 0).line_total(), 0.0);
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        assert!(order.is_empty());

        order.add_item(electronics_item(100.0, 2));
        order.add_item(LineItem::new(1001, 2, "OTHER001", "Chair", 50.0, 1));

        assert_eq!(order.item_count(), 2);
        assert_eq!(order.items[0].line_number, 1);
        assert_eq!(order.items[1].line_number, 2);
    }

    #[test]
    fn test_derived_fields_default_to_zero() {
        let order = Order::new(1002, "Jane Smith", "987-654-3210");
        assert_eq!(order.tax_amount, 0.0);
        assert_eq!(order.tariff_amount, 0.0);
        assert_eq!(order.total_amount, 0.0);
        assert_eq!(order.subtotal(), 0.0);
    }

    #[test]
    fn test_compute_totals_electronics() {
        // Subtotal 200 + tax 20 + tariff 10 = 230
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(electronics_item(100.0, 2));
        order.compute_totals();

        assert_eq!(order.subtotal(), 200.0);
        assert_eq!(order.tax_amount, 20.0);
        assert_eq!(order.tariff_amount, 10.0);
        assert_eq!(order.total_amount, 230.0);
    }

    #[test]
    fn test_compute_totals_is_idempotent() {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(electronics_item(100.0, 2));

        order.compute_totals();
        let first = (order.tax_amount, order.tariff_amount, order.total_amount);

        order.compute_totals();
        let second = (order.tax_amount, order.tariff_amount, order.total_amount);

        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_totals_recomputes_after_adding_items() {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(electronics_item(100.0, 2));
        order.compute_totals();
        let before = order.total_amount;

        order.add_item(LineItem::new(1001, 2, "OTHER001", "Chair", 50.0, 2));
        order.compute_totals();

        // Adding a positively-priced item never decreases the total
        assert!(order.total_amount > before);
        // 300 subtotal + 30 tax + 10 tariff
        assert_eq!(order.total_amount, 340.0);
    }

    #[test]
    fn test_order_serializes_with_items_and_totals() {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(electronics_item(100.0, 2));
        order.compute_totals();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_number"], 1001);
        assert_eq!(json["total_amount"], 230.0);
        assert_eq!(json["items"][0]["category_code"], "ELECT001");
    }
}
