//! # Repository Module
//!
//! Database repository implementations for Tally Orders.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Repository Pattern Explained                      │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean    │
//! │  API.                                                               │
//! │                                                                     │
//! │  Caller                                                             │
//! │       │                                                             │
//! │       │  db.orders().insert(&order)                                 │
//! │       ▼                                                             │
//! │  OrderRepository                                                    │
//! │  ├── insert(&self, order)        order row + items, one txn         │
//! │  ├── get_by_id(&self, number)    rehydrates Order with items        │
//! │  └── count(&self)                                                   │
//! │       │                                                             │
//! │       │  SQL                                                        │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • Clean separation of concerns                                     │
//! │  • SQL is isolated in one place                                     │
//! │  • Easy to swap implementations                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
