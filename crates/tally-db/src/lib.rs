//! # tally-db: Storage Layer and Order Engine
//!
//! This crate provides database access for the Tally order backend, plus the
//! order aggregation engine that owns every write to orders and order items.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Caller (excluded HTTP layer, seed binary, tests)           │
//! │       │                                                     │
//! │  ┌────▼───────────────────────────────────────────────┐     │
//! │  │                tally-db (THIS CRATE)               │     │
//! │  │                                                    │     │
//! │  │  ┌──────────┐  ┌──────────────┐  ┌──────────────┐  │     │
//! │  │  │ Database │  │ Repositories │  │ OrderEngine  │  │     │
//! │  │  │ (pool)   │  │ (reads,      │  │ (all order / │  │     │
//! │  │  │          │◄─│  simple CRUD)│  │  item writes)│  │     │
//! │  │  └──────────┘  └──────────────┘  └──────────────┘  │     │
//! │  └────┬───────────────────────────────────────────────┘     │
//! │       ▼                                                     │
//! │  SQLite (WAL, foreign keys ON)                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - `DbError` (storage) and `EngineError` (caller-facing)
//! - [`repository`] - Customer/product CRUD and order reads
//! - [`engine`] - The order aggregation engine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::{LineItemRequest, NewCustomer};
//! use tally_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./tally.db")).await?;
//!
//! let receipt = db
//!     .engine()
//!     .create_order(
//!         &NewCustomer::named("Jane"),
//!         &[LineItemRequest { product_id: 7, quantity: 2 }],
//!         None,
//!     )
//!     .await?;
//! ```

pub mod engine;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use engine::OrderEngine;
pub use error::{DbError, EngineError};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
