//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod pagination;
pub mod validation;

pub use item::{ItemPatch, ItemTitle, NewItem, DEFAULT_STATUS, DELETED_STATUS};
pub use pagination::{Pagination, PaginationParams, Paging};
pub use validation::ValidationError;
