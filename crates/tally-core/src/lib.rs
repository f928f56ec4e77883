//! # tally-core: Pure Business Logic for Tally Orders
//!
//! This crate is the **heart** of Tally Orders. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Tally Orders Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Caller (demo binary, tests)                   │  │
//! │  │    build Order ──► add items ──► compute ──► persist          │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              ★ tally-core (THIS CRATE) ★                      │  │
//! │  │                                                               │  │
//! │  │  ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌───────────┐       │  │
//! │  │  │  types   │ │ pricing  │ │ processor │ │ validation│       │  │
//! │  │  │  Order   │ │ TaxCalc  │ │ pass/fail │ │   rules   │       │  │
//! │  │  │ LineItem │ │ Tariff   │ │ outcome   │ │   checks  │       │  │
//! │  │  └──────────┘ └──────────┘ └───────────┘ └───────────┘       │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                tally-store (Persistence Layer)                │  │
//! │  │           SQLite repository, JSON files, routing              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, LineItem)
//! - [`pricing`] - Subtotal, tax, and tariff computation
//! - [`processor`] - Order processing and business validation
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same items,
//!    same totals
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Rejection is a value**: A business-invalid order is a normal
//!    [`processor::ProcessOutcome`], not an error
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{LineItem, Order};
//!
//! let mut order = Order::new(1001, "John Doe", "123-456-7890");
//! order.add_item(LineItem::new(1001, 1, "ELECT001", "42 Inch TV", 100.0, 2));
//! order.compute_totals();
//!
//! // Subtotal 200 + 10% tax (20) + 5% electronics tariff (10) = 230
//! assert_eq!(order.total_amount, 230.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod processor;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Order` instead of
// `use tally_core::types::Order`

pub use error::ValidationError;
pub use pricing::{OrderTotals, TARIFF_CATEGORY_PREFIX, TARIFF_RATE, TAX_RATE};
pub use processor::{OrderProcessor, ProcessOutcome};
pub use types::{LineItem, Order};
