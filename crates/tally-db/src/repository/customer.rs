//! # Customer Repository
//!
//! Single-row insert/select operations for customers. The order engine also
//! creates customers, but inside its own transaction; this repository is the
//! standalone registration path.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::{Customer, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Registers a customer and returns it with its assigned id.
    pub async fn insert(&self, new: &NewCustomer) -> DbResult<Customer> {
        debug!(name = %new.name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, national_id, email)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new.name)
        .bind(&new.national_id)
        .bind(&new.email)
        .execute(&self.pool)
        .await?;

        Ok(Customer {
            customer_id: result.last_insert_rowid(),
            name: new.name.clone(),
            national_id: new.national_id.clone(),
            email: new.email.clone(),
        })
    }

    /// Gets a customer by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, name, national_id, email
            FROM customers
            WHERE customer_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Lists all customers.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, name, national_id, email
            FROM customers
            ORDER BY customer_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
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
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let created = repo
            .insert(&NewCustomer {
                name: "Jane".to_string(),
                national_id: Some("123.456.789-00".to_string()),
                email: Some("jane@example.com".to_string()),
            })
            .await
            .unwrap();

        assert!(created.customer_id > 0);

        let fetched = repo.get_by_id(created.customer_id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Jane");
        assert_eq!(fetched.national_id.as_deref(), Some("123.456.789-00"));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.customers().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        repo.insert(&NewCustomer::named("A")).await.unwrap();
        repo.insert(&NewCustomer::named("B")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "A");
    }
}
