//! # Order Processor
//!
//! Thin orchestration over the pure core: computes totals, then runs
//! business validation and reports a pass/fail outcome.
//!
//! ## Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     OrderProcessor::process                         │
//! │                                                                     │
//! │  order ──► compute_totals()   (always, even for invalid orders)     │
//! │               │                                                     │
//! │               ▼                                                     │
//! │         customer_name present? ──no──► Rejected { diagnostic }      │
//! │               │                                                     │
//! │               ▼                                                     │
//! │         customer_phone present? ─no──► Rejected { diagnostic }      │
//! │               │                                                     │
//! │               ▼                                                     │
//! │         [strict mode] negative price/qty? ──yes──► Rejected         │
//! │               │                                                     │
//! │               ▼                                                     │
//! │            Accepted                                                 │
//! │                                                                     │
//! │  Item count, quantities, and prices never cause rejection in        │
//! │  default mode. Rejection is a VALUE, not an error.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Order;
use crate::validation;

// =============================================================================
// Process Outcome
// =============================================================================

/// The outcome of processing an order.
///
/// Distinguishes "order fails business validation" (this type, a normal
/// negative result with a diagnostic) from a structural failure such as a
/// persistence error, which surfaces as a store-layer error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Customer identity is complete; totals are computed and stored.
    Accepted,
    /// Business validation failed. The diagnostic is a human-readable
    /// description of what is missing or wrong.
    Rejected { diagnostic: String },
}

impl ProcessOutcome {
    /// True if the order passed validation.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ProcessOutcome::Accepted)
    }

    /// The diagnostic message, if the order was rejected.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ProcessOutcome::Accepted => None,
            ProcessOutcome::Rejected { diagnostic } => Some(diagnostic),
        }
    }
}

// =============================================================================
// Order Processor
// =============================================================================

/// Processes orders: computes totals and validates customer identity.
///
/// ## Strict Mode
/// By default the processor is permissive about item values: negative
/// prices and quantities flow into the arithmetic silently. Strict mode
/// (`with_strict_validation()`) additionally rejects them, still as a
/// normal [`ProcessOutcome::Rejected`], never as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderProcessor {
    strict: bool,
}

impl OrderProcessor {
    /// Creates a processor with default (permissive) validation.
    pub fn new() -> Self {
        OrderProcessor { strict: false }
    }

    /// Enables strict validation of item prices and quantities.
    pub fn with_strict_validation(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Processes the order: computes totals, then validates customer data.
    ///
    /// Totals are always computed and stored on the order, even when the
    /// outcome is `Rejected` - validation gates persistence, not pricing.
    pub fn process(&self, order: &mut Order) -> ProcessOutcome {
        order.compute_totals();

        if let Err(e) = validation::validate_customer_name(&order.customer_name) {
            return reject(e.to_string());
        }

        if let Err(e) = validation::validate_customer_phone(&order.customer_phone) {
            return reject(e.to_string());
        }

        if self.strict {
            for item in &order.items {
                if let Err(e) = validation::validate_unit_price(item.unit_price) {
                    return reject(format!("line {}: {}", item.line_number, e));
                }
                if let Err(e) = validation::validate_quantity(item.quantity) {
                    return reject(format!("line {}: {}", item.line_number, e));
                }
            }
        }

        ProcessOutcome::Accepted
    }
}

fn reject(reason: String) -> ProcessOutcome {
    ProcessOutcome::Rejected {
        diagnostic: format!("Order validation failed: {}", reason),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;

    fn order_with_items() -> Order {
        let mut order = Order::new(1001, "John Doe", "123-456-7890");
        order.add_item(LineItem::new(1001, 1, "ELECT001", "42 Inch TV", 300.0, 1));
        order.add_item(LineItem::new(1001, 2, "OTHER001", "Office Chair", 100.0, 2));
        order
    }

    #[test]
    fn test_process_accepts_complete_customer() {
        let mut order = order_with_items();
        let outcome = OrderProcessor::new().process(&mut order);

        assert!(outcome.is_accepted());
        assert_eq!(outcome.diagnostic(), None);
        // Totals were computed as part of processing:
        // subtotal 500 + tax 50 + tariff 15 = 565
        assert_eq!(order.total_amount, 565.0);
    }

    #[test]
    fn test_process_rejects_missing_name() {
        let mut order = order_with_items();
        order.customer_name.clear();

        let outcome = OrderProcessor::new().process(&mut order);
        assert!(!outcome.is_accepted());
        assert!(outcome.diagnostic().unwrap().contains("customer_name"));
    }

    #[test]
    fn test_process_rejects_missing_phone() {
        let mut order = order_with_items();
        order.customer_phone.clear();

        let outcome = OrderProcessor::new().process(&mut order);
        assert!(!outcome.is_accepted());
        assert!(outcome.diagnostic().unwrap().contains("customer_phone"));
    }

    #[test]
    fn test_process_accepts_whitespace_only_phone() {
        // Only the empty string counts as missing; no trimming is applied
        let mut order = order_with_items();
        order.customer_phone = "   ".to_string();

        let outcome = OrderProcessor::new().process(&mut order);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_rejected_order_still_gets_totals() {
        let mut order = order_with_items();
        order.customer_name.clear();

        let outcome = OrderProcessor::new().process(&mut order);
        assert!(!outcome.is_accepted());
        assert_eq!(order.total_amount, 565.0);
    }

    #[test]
    fn test_process_accepts_empty_order() {
        // Zero totals are fine; only customer identity matters
        let mut order = Order::new(1002, "Jane Smith", "987-654-3210");
        let outcome = OrderProcessor::new().process(&mut order);

        assert!(outcome.is_accepted());
        assert_eq!(order.total_amount, 0.0);
    }

    #[test]
    fn test_default_mode_accepts_negative_price() {
        let mut order = Order::new(1003, "Bob Brown", "444-567-8901");
        order.add_item(LineItem::new(1003, 1, "OTHER001", "Adjustment", -10.0, 1));

        let outcome = OrderProcessor::new().process(&mut order);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_strict_mode_rejects_negative_price() {
        let mut order = Order::new(1003, "Bob Brown", "444-567-8901");
        order.add_item(LineItem::new(1003, 1, "OTHER001", "Adjustment", -10.0, 1));

        let outcome = OrderProcessor::new()
            .with_strict_validation()
            .process(&mut order);
        assert!(!outcome.is_accepted());
        assert!(outcome.diagnostic().unwrap().contains("unit_price"));
    }

    #[test]
    fn test_strict_mode_rejects_negative_quantity() {
        let mut order = Order::new(1004, "Alice Johnson", "555-123-4567");
        order.add_item(LineItem::new(1004, 1, "ELECT001", "Laptop", 800.0, -1));

        let outcome = OrderProcessor::new()
            .with_strict_validation()
            .process(&mut order);
        assert!(!outcome.is_accepted());
        assert!(outcome.diagnostic().unwrap().contains("quantity"));
    }

    #[test]
    fn test_strict_mode_accepts_zero_quantity() {
        let mut order = Order::new(1004, "Bob Brown", "444-567-8901");
        order.add_item(LineItem::new(1004, 1, "ELECT003", "Headphones", 150.0, 0));

        let outcome = OrderProcessor::new()
            .with_strict_validation()
            .process(&mut order);
        assert!(outcome.is_accepted());
        assert_eq!(order.total_amount, 0.0);
    }
}
