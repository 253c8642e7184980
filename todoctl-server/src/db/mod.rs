//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by all handlers - no Arc<Mutex<Connection>>
//! - Schema is created at startup, before the listener binds
//! - Handlers depend on the `ItemStore` trait, not on the pool

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
