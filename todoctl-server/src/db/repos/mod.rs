//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation, no transactions
//! - Missing rows surface as `DbError::NotFound`

pub mod items;

pub use items::{DbError, Item, ItemStore, PgItemRepo};
