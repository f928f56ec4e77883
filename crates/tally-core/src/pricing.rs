//! # Pricing Module
//!
//! Subtotal, tax, and tariff computation for orders.
//!
//! ## Computation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       price_items(&items)                           │
//! │                                                                     │
//! │  items ──► 1. subtotal = Σ unit_price × quantity                    │
//! │            2. tax      = subtotal × 0.10                            │
//! │            3. tariff   = Σ over ELECT* items of                     │
//! │                          unit_price × quantity × 0.05               │
//! │            4. total    = subtotal + tax + tariff                    │
//! │                     │                                               │
//! │                     ▼                                               │
//! │              OrderTotals { subtotal, tax, tariff, total }           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numeric Semantics
//! All arithmetic is `f64` with no intermediate rounding. The stored fields
//! carry the raw computed values; callers round for display as needed.
//! Negative prices or quantities are not validated here and flow through
//! the arithmetic unchanged.

use serde::{Deserialize, Serialize};

use crate::types::LineItem;

// =============================================================================
// Rate Constants
// =============================================================================

/// Flat sales tax rate applied to every order subtotal (10%).
pub const TAX_RATE: f64 = 0.10;

/// Import tariff rate applied to electronics line totals (5%).
pub const TARIFF_RATE: f64 = 0.05;

/// Category-code prefix marking an item as electronics subject to tariff.
/// Exact, case-sensitive prefix match.
pub const TARIFF_CATEGORY_PREFIX: &str = "ELECT";

// =============================================================================
// Order Totals
// =============================================================================

/// The result of pricing a sequence of line items.
///
/// Plain value record; the [`crate::Order`] aggregate stores the latest
/// result rather than mutating state during computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Σ unit price × quantity, before tax and tariff.
    pub subtotal: f64,
    /// Flat tax on the subtotal.
    pub tax_amount: f64,
    /// Tariff over tariffable items only.
    pub tariff_amount: f64,
    /// subtotal + tax_amount + tariff_amount.
    pub total_amount: f64,
}

// =============================================================================
// Pricing
// =============================================================================

/// Prices a sequence of line items.
///
/// Pure and total: defined for every input, including an empty slice
/// (all-zero totals) and zero-quantity items (contribute nothing).
///
/// ## Example
/// ```rust
/// use tally_core::{pricing, LineItem};
///
/// let items = [LineItem::new(1, 1, "ELECT001", "TV", 100.0, 2)];
/// let totals = pricing::price_items(&items);
/// assert_eq!(totals.total_amount, 230.0);
/// ```
pub fn price_items(items: &[LineItem]) -> OrderTotals {
    let subtotal: f64 = items.iter().map(LineItem::line_total).sum();

    let tax_amount = subtotal * TAX_RATE;

    let tariff_amount: f64 = items
        .iter()
        .filter(|item| item.is_tariffable())
        .map(|item| item.line_total() * TARIFF_RATE)
        .sum();

    OrderTotals {
        subtotal,
        tax_amount,
        tariff_amount,
        total_amount: subtotal + tax_amount + tariff_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
