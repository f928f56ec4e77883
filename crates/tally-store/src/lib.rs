//! # tally-store: Persistence Layer for Tally Orders
//!
//! This crate persists fully-computed orders. It offers two targets - a
//! local SQLite database and pretty-printed JSON files - selected through
//! a single routing operation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Tally Orders Data Flow                         │
//! │                                                                     │
//! │  Caller (demo binary, tests)                                        │
//! │       │                                                             │
//! │       │  order.compute_totals()  (tally-core, pure)                 │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  tally-store (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   OrderStore::save(order, target)                             │  │
//! │  │        │                                                      │  │
//! │  │        ├── Database ──► OrderRepository ──► SQLite (WAL)      │  │
//! │  │        │                 (pool.rs, migrations embedded)       │  │
//! │  │        │                                                      │  │
//! │  │        └── JSON ──────► JsonStore ──► order-<n>.json          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - Order repository (SQLite)
//! - [`json`] - JSON file writer
//! - [`store`] - Save-target routing
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_store::{Database, DbConfig, JsonStore, OrderStore, SaveTarget};
//!
//! let db = Database::new(DbConfig::new("tally.db")).await?;
//! let store = OrderStore::new(db, JsonStore::new("./orders"));
//!
//! store.save(&order, "Database".parse()?).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod json;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use json::JsonStore;
pub use pool::{Database, DbConfig};
pub use store::{OrderStore, SaveTarget};

// Repository re-export for convenience
pub use repository::order::OrderRepository;
