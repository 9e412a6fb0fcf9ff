//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of the order backend. It contains the pricing
//! arithmetic, the domain types and the input validation as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP layer (out of scope, consumes tally-db)               │
//! │       │                                                     │
//! │  ┌────▼───────────────────────────────────────────────┐     │
//! │  │            ★ tally-core (THIS CRATE) ★             │     │
//! │  │                                                    │     │
//! │  │   ┌───────┐ ┌─────────┐ ┌───────┐ ┌────────────┐   │     │
//! │  │   │ money │ │ pricing │ │ types │ │ validation │   │     │
//! │  │   └───────┘ └─────────┘ └───────┘ └────────────┘   │     │
//! │  │                                                    │     │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                │     │
//! │  └────┬───────────────────────────────────────────────┘     │
//! │       │                                                     │
//! │  ┌────▼───────────────────────────────────────────────┐     │
//! │  │        tally-db (pool, repositories, engine)        │     │
//! │  └────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer minor-unit arithmetic (no floats!)
//! - [`pricing`] - Line subtotal and order total calculation
//! - [`types`] - Domain types (Customer, Product, Order, OrderItem, ...)
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: database, network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are minor units (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

pub use error::{PricingError, ValidationError};
pub use money::Money;
pub use types::*;
