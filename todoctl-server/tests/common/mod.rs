//! Shared test fixtures: in-memory stores and request helpers

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use todoctl_server::models::{ItemPatch, NewItem, Pagination, DELETED_STATUS};
use todoctl_server::{build_router, AppState, DbError, Item, ItemStore, ServerConfig};

/// Vec-backed store with the same semantics as the Postgres repository
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Item>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Item> {
        self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned()
    }

    fn not_found(id: i64) -> DbError {
        DbError::NotFound {
            resource: "Item",
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn insert(&self, item: NewItem) -> Result<Item, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map_or(1, |last| last.id + 1);
        let row = Item {
            id,
            title: item.title.as_str().to_owned(),
            description: item.description,
            status: item.status,
            created_at: Utc::now(),
            updated_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Item, DbError> {
        self.get(id).ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: i64, patch: &ItemPatch) -> Result<(), DbError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        if let Some(title) = &patch.title {
            row.title = title.as_str().to_owned();
        }
        if let Some(description) = &patch.description {
            row.description = description.clone();
        }
        if let Some(status) = &patch.status {
            row.status = status.clone();
        }
        row.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), DbError> {
        let patch = ItemPatch {
            status: Some(DELETED_STATUS.to_owned()),
            ..ItemPatch::default()
        };
        self.update(id, &patch).await
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        Ok(self.len() as i64)
    }

    async fn list_page(&self, page: Pagination) -> Result<Vec<Item>, DbError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|i| !i.is_deleted())
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}

/// Store whose every operation fails the way a dropped connection would
pub struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn insert(&self, _item: NewItem) -> Result<Item, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Item, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: i64, _patch: &ItemPatch) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn soft_delete(&self, _id: i64) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn list_page(&self, _page: Pagination) -> Result<Vec<Item>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

/// Store whose every operation panics mid-request
pub struct PanickingStore;

#[async_trait]
impl ItemStore for PanickingStore {
    async fn insert(&self, _item: NewItem) -> Result<Item, DbError> {
        panic!("insert exploded")
    }

    async fn find_by_id(&self, _id: i64) -> Result<Item, DbError> {
        panic!("find_by_id exploded")
    }

    async fn update(&self, _id: i64, _patch: &ItemPatch) -> Result<(), DbError> {
        panic!("update exploded")
    }

    async fn soft_delete(&self, _id: i64) -> Result<(), DbError> {
        panic!("soft_delete exploded")
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        panic!("count_all exploded")
    }

    async fn list_page(&self, _page: Pagination) -> Result<Vec<Item>, DbError> {
        panic!("list_page exploded")
    }
}

pub fn app(store: Arc<dyn ItemStore>) -> Router {
    build_router(AppState::new(store), &ServerConfig::default())
}

/// Send one request and decode the JSON response body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
