//! # Error Types
//!
//! Two layers live here:
//!
//! - [`DbError`] - storage-level failures, wrapping sqlx errors with context
//! - [`EngineError`] - the taxonomy the order engine exposes to callers
//!
//! ## Error Flow
//! ```text
//! sqlx::Error ──► DbError ──► EngineError::Persistence ──► caller
//!                              EngineError::{Validation, Pricing,
//!                                ProductNotFound, OrderNotFound,
//!                                TotalMismatch} detected before or during
//!                                the atomic scope, always after rollback
//! ```

use thiserror::Error;

use tally_core::{PricingError, ValidationError};

// =============================================================================
// Storage Errors
// =============================================================================

/// Database operation errors.
///
/// These wrap sqlx errors and add categorization so callers can distinguish
/// constraint violations from infrastructure failures.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    #[error("duplicate {field}: already exists")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // "UNIQUE constraint failed: <table>.<column>"
                // "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Engine Errors
// =============================================================================

/// Failures of the order aggregation engine, as seen by callers.
///
/// Everything except `Persistence` is detected before the atomic scope
/// opens; `Persistence` means the scope failed to commit and was fully
/// rolled back. Partial writes are never observable either way.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Bad input shape or values; no write was attempted.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Pricing precondition failure; no write was attempted.
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// A referenced product does not exist; no write was attempted.
    #[error("product not found: {0}")]
    ProductNotFound(i64),

    /// The append target order does not exist.
    #[error("order not found: {0}")]
    OrderNotFound(i64),

    /// A caller-supplied total disagrees with the derived total.
    /// The engine never persists the caller's figure.
    #[error("total mismatch: declared {declared_cents} cents, derived {derived_cents} cents")]
    TotalMismatch {
        declared_cents: i64,
        derived_cents: i64,
    },

    /// The atomic scope failed to commit; nothing from it is visible.
    #[error("persistence error: {0}")]
    Persistence(#[from] DbError),
}

// sqlx errors reach the engine through storage calls; fold them straight
// into the Persistence variant so `?` works across both layers.
impl From<sqlx::Error> for EngineError {
    fn from(err: sqlx::Error) -> Self {
        EngineError::Persistence(err.into())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Order", 42);
        assert_eq!(err.to_string(), "Order not found: 42");
    }

    #[test]
    fn test_engine_error_wraps_validation() {
        let err: EngineError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, EngineError::Validation(_)));
        assert_eq!(err.to_string(), "validation error: name is required");
    }

    #[test]
    fn test_total_mismatch_message() {
        let err = EngineError::TotalMismatch {
            declared_cents: 2400,
            derived_cents: 2500,
        };
        assert_eq!(
            err.to_string(),
            "total mismatch: declared 2400 cents, derived 2500 cents"
        );
    }
}
