//! # Validation Module
//!
//! Field-level validation rules for Tally Orders.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: THIS MODULE - field rules                                 │
//! │  ├── customer identity completeness (always checked)                │
//! │  └── non-negative price/quantity (strict mode only)                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: OrderProcessor - turns failures into a pass/fail          │
//! │  outcome with a diagnostic message (never an exception)             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite) - NOT NULL / FK constraints             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals computation deliberately sits outside all of this: it runs
//! unconditionally and accepts whatever values the items carry.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Customer Identity Validators
// =============================================================================

/// Validates the customer name.
///
/// ## Rules
/// - Must not be the empty string
/// - No trimming: a whitespace-only name is present, just odd.
///   Callers decide whether to normalize before validating.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("John Doe").is_ok());
/// assert!(validate_customer_name("   ").is_ok());
/// assert!(validate_customer_name("").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_name".to_string(),
        });
    }

    Ok(())
}

/// Validates the customer phone number.
///
/// ## Rules
/// - Must not be the empty string
/// - No format check: feeds supply phone numbers in assorted formats
pub fn validate_customer_phone(phone: &str) -> ValidationResult<()> {
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_phone".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Strict-Mode Numeric Validators
// =============================================================================

/// Validates a unit price (strict mode only).
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity (strict mode only).
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed and contributes nothing to totals
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("John Doe").is_ok());

        assert!(validate_customer_name("").is_err());
    }

    #[test]
    fn test_validate_customer_phone() {
        assert!(validate_customer_phone("123-456-7890").is_ok());
        assert!(validate_customer_phone("+1 (555) 123 4567").is_ok());

        assert!(validate_customer_phone("").is_err());
    }

    #[test]
    fn test_whitespace_only_fields_count_as_present() {
        assert!(validate_customer_name("   ").is_ok());
        assert!(validate_customer_phone("   ").is_ok());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(10.99).is_ok());
        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(5).is_ok());
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(-1).is_err());
    }
}
