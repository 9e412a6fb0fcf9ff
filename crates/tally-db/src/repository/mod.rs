//! # Repository Module
//!
//! Database repository implementations.
//!
//! Repositories isolate SQL behind a typed API. They cover the record-shaped
//! CRUD of this system: customer and product registration/lookup, and the
//! read side of orders.
//!
//! ## Write-Path Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  customers  ← CustomerRepository::insert  (standalone path) │
//! │  products   ← ProductRepository::insert                     │
//! │                                                             │
//! │  orders      ┐                                              │
//! │  order_items ┘ ← OrderEngine ONLY (crate::engine)           │
//! │                                                             │
//! │  No repository exposes an order or order-item write; the    │
//! │  total/items invariant is enforceable only because there    │
//! │  is exactly one sanctioned write path.                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - customer registration and lookup
//! - [`product::ProductRepository`] - product registration and lookup
//! - [`order::OrderRepository`] - order reads, including the
//!   recompute-from-items audit sum

pub mod customer;
pub mod order;
pub mod product;
