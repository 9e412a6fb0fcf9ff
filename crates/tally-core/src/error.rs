//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! tally-core errors (this file)
//! ├── ValidationError  - input validation failures, raised before any write
//! └── PricingError     - bad arguments to the pricing calculator
//!
//! tally-db errors (separate crate)
//! ├── DbError          - storage operation failures
//! └── EngineError      - the taxonomy exposed to callers, wraps all of the
//!                        above plus ProductNotFound / OrderNotFound /
//!                        TotalMismatch / Persistence
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never bare strings

use thiserror::Error;

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements.
/// Raised before business logic runs, and always before any write.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

/// Pricing calculator errors.
///
/// The calculator is a pure function; these are precondition failures on its
/// arguments or a subtotal outside the representable range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Quantity must be greater than zero.
    #[error("invalid quantity: {0} (must be > 0)")]
    InvalidQuantity(i64),

    /// Unit price must be non-negative, in minor units.
    #[error("invalid unit price: {0} cents (must be >= 0)")]
    InvalidPrice(i64),

    /// The line subtotal exceeds the representable range of 64-bit minor
    /// units.
    #[error("subtotal overflow: {unit_price_cents} cents x {quantity}")]
    Overflow {
        unit_price_cents: i64,
        quantity: i64,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_pricing_error_messages() {
        assert_eq!(
            PricingError::InvalidQuantity(0).to_string(),
            "invalid quantity: 0 (must be > 0)"
        );
        assert_eq!(
            PricingError::InvalidPrice(-100).to_string(),
            "invalid unit price: -100 cents (must be >= 0)"
        );
    }
}
