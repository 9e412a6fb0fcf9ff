//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                 │
//! │                                                             │
//! │  In binary floating point:                                  │
//! │    0.1 + 0.2 = 0.30000000000000004  ← drift                 │
//! │                                                             │
//! │  OUR SOLUTION: integer minor units (cents)                  │
//! │    3.33 is stored as 333; 333 × 3 = 999, exactly 9.99       │
//! │                                                             │
//! │  The stored order total equals the sum of its line items    │
//! │  only if every intermediate value is exact. Integers are.   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unit prices, frozen line subtotals and order totals all flow through this
//! type. Values cross serde boundaries as plain integers (minor units).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays closed; negatives are rejected at
///   the validation boundary, not by the representation
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde newtype**: serializes as a bare integer, so a total of 25.00
///   crosses the wire as `2500`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // 12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (e.g. dollars).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion, always 0-99.
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, checking for overflow.
    ///
    /// Integer times integer: the result is exact at minor-unit precision,
    /// so no rounding step exists between a unit price and a line subtotal.
    /// `None` means the product does not fit in 64-bit minor units; the
    /// pricing calculator turns that into a typed error instead of letting
    /// an extreme price x quantity wrap or panic.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(333); // 3.33
    /// assert_eq!(unit_price.checked_multiply_quantity(3).unwrap().cents(), 999); // 9.99
    ///
    /// assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// Human-readable format for logs and error messages.
/// Wire formats use the raw integer form instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Exact summation for order totals. An empty iterator sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_checked_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(
            unit_price.checked_multiply_quantity(3),
            Some(Money::from_cents(897))
        );
    }

    #[test]
    fn test_checked_multiply_quantity_overflow_is_none() {
        assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
        assert!(Money::from_cents(i64::MAX / 2).checked_multiply_quantity(3).is_none());
    }

    #[test]
    fn test_sum() {
        let total: Money = [3000, 999, 1]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 4000);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::from_cents(100).is_negative());
    }
}
