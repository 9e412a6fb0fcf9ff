//! # Order Repository
//!
//! Read-side operations for orders and their line items.
//!
//! This repository deliberately exposes **no write API**. Order and
//! order-item rows are written exclusively by [`crate::engine::OrderEngine`],
//! which is what makes the total/items invariant enforceable: a second write
//! path could insert an item without the paired total update and break the
//! invariant with no detector.
//!
//! [`OrderRepository::items_total`] is the recompute-from-items sum. The
//! engine maintains totals incrementally and does not call it per operation;
//! it exists so tests and audits can verify
//! `orders.total_amount == SUM(order_items.price_per_item)` independently.

use sqlx::SqlitePool;

use crate::error::DbResult;
use tally_core::{Money, Order, OrderItem, OrderSummary};

/// Repository for order reads.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Gets an order header by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, customer_id, order_date, total_amount_cents
            FROM orders
            WHERE order_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets all line items for an order, in insertion order.
    pub async fn items(&self, order_id: i64) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT item_id, order_id, product_id, quantity, price_per_item_cents
            FROM order_items
            WHERE order_id = ?1
            ORDER BY item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Lists all orders joined with their customer's name.
    pub async fn list(&self) -> DbResult<Vec<OrderSummary>> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT
                o.order_id,
                c.customer_id,
                c.name AS customer_name,
                o.order_date,
                o.total_amount_cents
            FROM orders o
            JOIN customers c ON o.customer_id = c.customer_id
            ORDER BY o.order_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Recomputes an order's total from its line items.
    ///
    /// Audit hook for the stored total: on a consistent database this equals
    /// `Order::total_amount` for every order the engine has touched. Zero
    /// for an order with no items (which the engine never produces) and for
    /// a nonexistent order.
    pub async fn items_total(&self, order_id: i64) -> DbResult<Money> {
        let sum: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT SUM(price_per_item_cents)
            FROM order_items
            WHERE order_id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Money::from_cents(sum.unwrap_or(0)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// The interesting order read cases (populated orders, invariant audits) are
// exercised in engine.rs where rows actually get written; these cover the
// empty-database edges.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_get_missing_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.orders().get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_items_total_empty_is_zero() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let total = db.orders().items_total(1).await.unwrap();
        assert!(total.is_zero());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.orders().list().await.unwrap().is_empty());
    }
}
