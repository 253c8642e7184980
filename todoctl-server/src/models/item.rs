//! To-do item domain types
//!
//! Request payloads are validated into these before they reach the store.

use super::ValidationError;

/// Status reserved for soft-deleted rows
pub const DELETED_STATUS: &str = "deleted";

/// Status given to new items that don't specify one
pub const DEFAULT_STATUS: &str = "open";

/// Validated item title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Create a new item title.
    ///
    /// # Rules
    /// - Non-empty; the text is otherwise kept exactly as sent
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::ItemTitle;
    ///
    /// assert!(ItemTitle::new("Buy milk").is_ok());
    /// assert!(ItemTitle::new("").is_err());
    /// assert_eq!(ItemTitle::new("  padded ").unwrap().as_str(), "  padded ");
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fields for a new row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: ItemTitle,
    pub description: String,
    pub status: String,
}

impl NewItem {
    /// Build a new item, filling in defaults for the optional fields.
    pub fn new(title: ItemTitle, description: Option<String>, status: Option<String>) -> Self {
        Self {
            title,
            description: description.unwrap_or_default(),
            status: status.unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
        }
    }
}

/// Partial update: `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<ItemTitle>,
    pub description: Option<String>,
    pub status: Option<String>,
}
