//! todoctl-server: HTTP CRUD service for to-do items
//!
//! Layers, leaves first:
//! - `models`: validated input types and pagination
//! - `db`: Postgres pool, schema, and the `ItemStore` repository
//! - `http`: axum routes, extractors, error mapping, server bootstrap

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, Item, ItemStore, PgItemRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
