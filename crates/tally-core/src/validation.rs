//! # Validation Module
//!
//! Input validation for the order engine's public operations.
//!
//! ## Validation Strategy
//! ```text
//! Layer 1: HTTP layer (out of scope) - shape/deserialization checks
//! Layer 2: THIS MODULE              - business preconditions, before any write
//! Layer 3: Database                 - NOT NULL / CHECK / FK constraints
//!
//! Defense in depth: each layer catches a different failure class.
//! ```

use crate::error::ValidationError;
use crate::types::LineItemRequest;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for a customer name (mirrors the legacy VARCHAR(255)).
pub const MAX_NAME_LEN: usize = 255;

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the line-item list of a create-order request.
///
/// ## Rules
/// - Must contain at least one line
/// - Every line's quantity must be positive
///
/// Runs before any product lookup or write, so a bad request never touches
/// storage.
pub fn validate_line_items(items: &[LineItemRequest]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "line_items".to_string(),
        });
    }

    for item in items {
        validate_quantity(item.quantity)?;
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
        assert!(validate_customer_name("Jane").is_ok());
        assert!(validate_customer_name("  Jane Doe  ").is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_line_items() {
        assert!(validate_line_items(&[]).is_err());

        let good = [LineItemRequest {
            product_id: 7,
            quantity: 2,
        }];
        assert!(validate_line_items(&good).is_ok());

        let bad_qty = [
            LineItemRequest {
                product_id: 7,
                quantity: 2,
            },
            LineItemRequest {
                product_id: 8,
                quantity: 0,
            },
        ];
        assert_eq!(
            validate_line_items(&bad_qty),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
    }
}
