//! # Order Aggregation Engine
//!
//! Creates an order together with its line items, or appends a line item to
//! an existing order, while keeping the derived invariant true at every
//! observable point:
//!
//! ```text
//! orders.total_amount == SUM(order_items.price_per_item)   for that order
//! ```
//!
//! ## How the Invariant Is Kept
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  create_order                                               │
//! │    validate ──► resolve products ──► derive subtotals/total │
//! │        (no writes yet; any failure aborts with no rows)     │
//! │    ┌─ one transaction ──────────────────────────────┐       │
//! │    │ INSERT customer                                │       │
//! │    │ INSERT order (derived total)                   │       │
//! │    │ INSERT item × N (frozen subtotals)             │       │
//! │    └─ commit = the atomic visibility point ─────────┘       │
//! │                                                             │
//! │  append_item                                                │
//! │    validate ──► resolve product ──► derive subtotal         │
//! │    ┌─ one transaction ──────────────────────────────┐       │
//! │    │ UPDATE orders SET total = total + subtotal     │       │
//! │    │   (atomic SQL increment; 0 rows = OrderNotFound)│      │
//! │    │ INSERT item (frozen subtotal)                  │       │
//! │    └─ commit ───────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine derives every total itself through `tally_core::pricing`; a
//! caller-supplied total is only checked against the derived value
//! (`TotalMismatch` on disagreement), never persisted.
//!
//! Appends maintain the total incrementally rather than recomputing the item
//! sum. The increment is a single SQL statement inside the same transaction
//! as the item insert, so concurrent appends to one order serialize on the
//! order row and there is no read-modify-write race. The trade-off: nothing
//! detects drift introduced outside this engine, which is why this module is
//! the only sanctioned write path (see below) and why
//! [`OrderRepository::items_total`](crate::repository::order::OrderRepository::items_total)
//! exists as a recompute audit.
//!
//! ## Single Sanctioned Write Path
//! `insert_order_item` is private to this module and no repository exposes
//! an order or order-item write, so module visibility, not convention, rules
//! out the unpaired item insert that would silently break the invariant.

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::repository::product::ProductRepository;
use tally_core::{
    pricing, validation, AppendReceipt, LineItemRequest, Money, NewCustomer, OrderReceipt,
};

/// The order aggregation engine: sole writer of order and order-item rows.
///
/// Holds no mutable state of its own; all shared state lives in the
/// database, so one engine value can serve any number of concurrent
/// request workers.
#[derive(Debug, Clone)]
pub struct OrderEngine {
    pool: SqlitePool,
    products: ProductRepository,
}

impl OrderEngine {
    /// Creates a new OrderEngine over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        let products = ProductRepository::new(pool.clone());
        OrderEngine { pool, products }
    }

    /// Creates a customer, an order and its line items as one atomic unit.
    ///
    /// ## Arguments
    /// * `customer` - customer to register with the order (name required)
    /// * `items` - requested lines, non-empty; prices are resolved here
    /// * `declared_total` - optional caller-computed total; must equal the
    ///   derived total or the request is rejected with `TotalMismatch`
    ///
    /// ## Failure Modes
    /// `Validation` and `ProductNotFound` are detected before any write;
    /// `Persistence` means the transaction failed and was rolled back. In
    /// every failure case zero rows from this attempt are visible.
    pub async fn create_order(
        &self,
        customer: &NewCustomer,
        items: &[LineItemRequest],
        declared_total: Option<Money>,
    ) -> EngineResult<OrderReceipt> {
        validation::validate_customer_name(&customer.name)?;
        validation::validate_line_items(items)?;

        // Resolve and price every line before opening the atomic scope.
        // A miss on the last product must abort as cleanly as on the first.
        let mut priced: Vec<(LineItemRequest, Money)> = Vec::with_capacity(items.len());
        for item in items {
            let product = self
                .products
                .find_by_id(item.product_id)
                .await?
                .ok_or(EngineError::ProductNotFound(item.product_id))?;

            let subtotal = pricing::line_total(product.unit_price(), item.quantity)?;
            priced.push((*item, subtotal));
        }

        let derived = pricing::order_total(priced.iter().map(|(_, subtotal)| *subtotal));

        if let Some(declared) = declared_total {
            if declared != derived {
                return Err(EngineError::TotalMismatch {
                    declared_cents: declared.cents(),
                    derived_cents: derived.cents(),
                });
            }
        }

        let mut tx = self.pool.begin().await?;

        let customer_id = sqlx::query(
            r#"
            INSERT INTO customers (name, national_id, email)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.national_id)
        .bind(&customer.email)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let order_id = sqlx::query(
            r#"
            INSERT INTO orders (customer_id, order_date, total_amount_cents)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(customer_id)
        .bind(Utc::now())
        .bind(derived.cents())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for (item, subtotal) in &priced {
            insert_order_item(&mut tx, order_id, item.product_id, item.quantity, *subtotal)
                .await?;
        }

        tx.commit().await?;

        info!(
            order_id,
            customer_id,
            total = %derived,
            lines = priced.len(),
            "Order created"
        );

        Ok(OrderReceipt {
            order_id,
            customer_id,
            total: derived,
        })
    }

    /// Appends one line item to an existing order, re-establishing the total
    /// invariant in the same transaction.
    ///
    /// The stored total is advanced with an atomic SQL increment rather than
    /// a read-compute-write round trip, so two concurrent appends against
    /// the same order cannot lose an update. Item insert and increment
    /// commit or roll back together; on any failure the total stays at its
    /// pre-call value and no item row is visible.
    pub async fn append_item(
        &self,
        order_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> EngineResult<AppendReceipt> {
        validation::validate_quantity(quantity)?;

        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(EngineError::ProductNotFound(product_id))?;

        let subtotal = pricing::line_total(product.unit_price(), quantity)?;

        let mut tx = self.pool.begin().await?;

        // Increment first: it doubles as the existence check and takes the
        // order row's write lock before the item insert.
        let updated = sqlx::query(
            r#"
            UPDATE orders
            SET total_amount_cents = total_amount_cents + ?1
            WHERE order_id = ?2
            "#,
        )
        .bind(subtotal.cents())
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // dropping the transaction rolls it back
            return Err(EngineError::OrderNotFound(order_id));
        }

        let item_id = insert_order_item(&mut tx, order_id, product_id, quantity, subtotal).await?;

        let new_total_cents: i64 =
            sqlx::query_scalar("SELECT total_amount_cents FROM orders WHERE order_id = ?1")
                .bind(order_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        debug!(
            order_id,
            item_id,
            subtotal = %subtotal,
            new_total = new_total_cents,
            "Order item appended"
        );

        Ok(AppendReceipt {
            item_id,
            new_total: Money::from_cents(new_total_cents),
        })
    }
}

/// Inserts one order-item row with its frozen price snapshot.
///
/// Private on purpose: every item insert must travel through an engine
/// operation that also establishes the matching order total.
async fn insert_order_item(
    tx: &mut Transaction<'_, Sqlite>,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    price_per_item: Money,
) -> EngineResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO order_items (order_id, product_id, quantity, price_per_item_cents)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(order_id)
    .bind(product_id)
    .bind(quantity)
    .bind(price_per_item.cents())
    .execute(&mut **tx)
    .await?;

    Ok(result.last_insert_rowid())
}

// =============================================================================
// Unit Tests
// =============================================================================
