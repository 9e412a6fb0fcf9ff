//! # Product Repository
//!
//! Database operations for products.
//!
//! Products are read-only inputs to the order engine: `find_by_id` resolves
//! a product to its current name and authoritative unit price, and a miss is
//! a hard abort for any order operation referencing it. Registration and
//! listing exist for the surrounding CRUD surface.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::{Money, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Registers a product and returns it with its assigned id.
    pub async fn insert(&self, name: &str, unit_price: Money) -> DbResult<Product> {
        debug!(name = %name, unit_price = %unit_price, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, unit_price_cents)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(unit_price.cents())
        .execute(&self.pool)
        .await?;

        Ok(Product {
            product_id: result.last_insert_rowid(),
            name: name.to_string(),
            unit_price_cents: unit_price.cents(),
        })
    }

    /// Resolves a product by ID. `None` means the product does not exist.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, unit_price_cents
            FROM products
            WHERE product_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, unit_price_cents
            FROM products
            ORDER BY product_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts registered products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let created = repo
            .insert("Widget", Money::from_cents(1250))
            .await
            .unwrap();
        assert!(created.product_id > 0);

        let fetched = repo.find_by_id(created.product_id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.unit_price(), Money::from_cents(1250));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.products().find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_negative_price_rejected_by_schema() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let result = db.products().insert("Bad", Money::from_cents(-1)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert("A", Money::from_cents(100)).await.unwrap();
        repo.insert("B", Money::from_cents(200)).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
