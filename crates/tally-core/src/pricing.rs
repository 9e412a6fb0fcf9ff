//! # Pricing Calculator
//!
//! Computes line subtotals and order totals in exact minor-unit arithmetic.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  OrderEngine (tally-db)                                     │
//! │                                                             │
//! │  product lookup ──► unit price                              │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  line_total(unit_price, quantity)   ← THIS MODULE           │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  order_total(line subtotals)        ← THIS MODULE           │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  persisted as the order's total_amount                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine derives every persisted total through these two functions; a
//! caller-supplied total is only ever compared against the derived value,
//! never stored.
//!
//! ## Precision
//! Unit prices are integer minor units and quantities are integers, so the
//! product is exact at two-decimal precision. There is no rounding step and
//! no floating point anywhere in the path.

use crate::error::PricingError;
use crate::money::Money;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Computes the subtotal for one line item: `unit_price * quantity`.
///
/// ## Preconditions
/// - `quantity > 0`, else `PricingError::InvalidQuantity`
/// - `unit_price >= 0`, else `PricingError::InvalidPrice`
/// - the product fits in 64-bit minor units, else `PricingError::Overflow`
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::pricing::line_total;
///
/// // 12.50 x 2 = 25.00
/// let subtotal = line_total(Money::from_cents(1250), 2).unwrap();
/// assert_eq!(subtotal.cents(), 2500);
/// ```
pub fn line_total(unit_price: Money, quantity: i64) -> PricingResult<Money> {
    if quantity <= 0 {
        return Err(PricingError::InvalidQuantity(quantity));
    }
    if unit_price.is_negative() {
        return Err(PricingError::InvalidPrice(unit_price.cents()));
    }

    unit_price
        .checked_multiply_quantity(quantity)
        .ok_or(PricingError::Overflow {
            unit_price_cents: unit_price.cents(),
            quantity,
        })
}

/// Computes an order total as the exact sum of its line subtotals.
///
/// Returns zero for an empty sequence; whether an empty order is acceptable
/// is the caller's validation concern, not a pricing one.
pub fn order_total<I>(line_totals: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    line_totals.into_iter().sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
