//! # Domain Types
//!
//! Core domain types for the order backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Domain Types                           │
//! │                                                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐   │
//! │  │   Customer   │  │    Order     │  │    OrderItem     │   │
//! │  │ ──────────── │  │ ──────────── │  │ ──────────────── │   │
//! │  │ customer_id  │  │ order_id     │  │ item_id          │   │
//! │  │ name         │  │ customer_id  │  │ order_id (FK)    │   │
//! │  │ national_id  │  │ order_date   │  │ product_id (FK)  │   │
//! │  │ email        │  │ total_cents  │  │ quantity         │   │
//! │  └──────────────┘  └──────────────┘  │ price_per_item   │   │
//! │                                      └──────────────────┘   │
//! │  Customer 1──N Order 1──N OrderItem N──1 Product            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Monetary fields are stored as `*_cents: i64` (matching the database
//! columns) with `Money` accessor methods, so row types derive `FromRow`
//! without custom codecs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Never mutated or deleted by the order engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Storage-assigned identifier.
    pub customer_id: i64,
    /// Display name. Required, non-empty.
    pub name: String,
    /// Optional national identity document string.
    pub national_id: Option<String>,
    /// Optional contact email.
    pub email: Option<String>,
}

/// Input shape for creating a customer (id not yet assigned).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub national_id: Option<String>,
    pub email: Option<String>,
}

impl NewCustomer {
    /// Convenience constructor for the common name-only case.
    pub fn named(name: impl Into<String>) -> Self {
        NewCustomer {
            name: name.into(),
            national_id: None,
            email: None,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
///
/// Owned by the product collaborator; the order engine only reads it to
/// resolve the authoritative unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    /// Current unit price in minor units. Non-negative.
    pub unit_price_cents: i64,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order header.
///
/// Invariant: `total_amount_cents` equals the sum of `price_per_item_cents`
/// across the order's items after every successful engine operation. The
/// engine is the sole writer of this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: DateTime<Utc>,
    pub total_amount_cents: i64,
}

impl Order {
    /// Returns the stored total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

/// An order joined with its customer's name, for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub order_id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount_cents: i64,
}

// =============================================================================
// Order Item
// =============================================================================

/// One line item within an order.
///
/// `price_per_item_cents` is a frozen snapshot: unit price × quantity at
/// write time, intentionally decoupled from later product price changes.
/// Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price_per_item_cents: i64,
}

impl OrderItem {
    /// Returns the frozen line subtotal as Money.
    #[inline]
    pub fn price_per_item(&self) -> Money {
        Money::from_cents(self.price_per_item_cents)
    }
}

// =============================================================================
// Engine Request / Response Shapes
// =============================================================================

/// One requested line: which product, how many.
/// The engine resolves the price itself; callers cannot supply one per line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// Result of a successful `create_order`: the commit point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: i64,
    pub customer_id: i64,
    /// The derived total that was persisted.
    pub total: Money,
}

/// Result of a successful `append_item`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AppendReceipt {
    pub item_id: i64,
    /// The order's total after the increment committed.
    pub new_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_accessors() {
        let product = Product {
            product_id: 7,
            name: "Widget".to_string(),
            unit_price_cents: 1250,
        };
        assert_eq!(product.unit_price(), Money::from_cents(1250));

        let item = OrderItem {
            item_id: 1,
            order_id: 1,
            product_id: 7,
            quantity: 2,
            price_per_item_cents: 2500,
        };
        assert_eq!(item.price_per_item().cents(), 2500);
    }

    #[test]
    fn test_receipt_serializes_money_as_integer_minor_units() {
        let receipt = OrderReceipt {
            order_id: 1,
            customer_id: 2,
            total: Money::from_cents(2500),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total"], serde_json::json!(2500));
    }

    #[test]
    fn test_new_customer_named() {
        let customer = NewCustomer::named("Jane");
        assert_eq!(customer.name, "Jane");
        assert!(customer.national_id.is_none());
        assert!(customer.email.is_none());
    }
}
