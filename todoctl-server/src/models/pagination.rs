//! Pagination types for the item list

use serde::{Deserialize, Deserializer, Serialize};

/// Limits at or above this fall back to the default
const LIMIT_CEILING: u32 = 100;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

/// Normalized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (1..=99)
    pub limit: u32,
}

impl Pagination {
    /// Normalize raw page/limit values.
    ///
    /// - Page 0 becomes 1
    /// - Limit 0 or >= 100 becomes 10; anything in 1..=99 is kept
    ///
    /// Normalizing an already normalized value is a no-op.
    pub fn normalize(page: u32, limit: u32) -> Self {
        let page = if page == 0 { 1 } else { page };
        let limit = if limit == 0 || limit >= LIMIT_CEILING {
            DEFAULT_LIMIT
        } else {
            limit
        };

        Self { page, limit }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::normalize(0, 0)
    }
}

/// Query parameters for pagination
///
/// An empty value (`?page=`) counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u32>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::normalize(params.page.unwrap_or(0), params.limit.unwrap_or(0))
    }
}

/// Paging envelope returned next to a list payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
    /// Row count across the whole table, soft-deleted rows included
    pub total: i64,
}

impl Paging {
    pub fn new(page: Pagination, total: i64) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            total,
        }
    }
}
