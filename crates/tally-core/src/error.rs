//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Error Types                               │
//! │                                                                     │
//! │  tally-core errors (this file)                                      │
//! │  └── ValidationError  - Field validation failures                   │
//! │                                                                     │
//! │  tally-store errors (separate crate)                                │
//! │  └── StoreError       - Persistence failures, bad save targets      │
//! │                                                                     │
//! │  NOTE: a business-rejected order is NOT an error. Rejection is a    │
//! │  normal ProcessOutcome value carrying a diagnostic message.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bad value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// These occur when input doesn't meet field requirements.
/// Used by the processor to build rejection diagnostics.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
