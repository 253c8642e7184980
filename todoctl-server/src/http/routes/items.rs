//! Item endpoints under /api/v1/items

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::Item;
use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, JsonBody, QueryParams};
use crate::http::server::AppState;
use crate::models::{ItemPatch, ItemTitle, NewItem, Pagination, PaginationParams, Paging};

/// Create item request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Update item request; absent and `null` fields are left untouched
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<UpdateItemRequest> for ItemPatch {
    type Error = ApiError;

    fn try_from(req: UpdateItemRequest) -> Result<Self, Self::Error> {
        let title = req.title.as_deref().map(ItemTitle::new).transpose()?;

        Ok(Self {
            title,
            description: req.description,
            status: req.status,
        })
    }
}

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            status: item.status,
            created_at: item.created_at.to_rfc3339(),
            updated_at: item.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// `{"data": ...}` envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// `{"data": [...], "paging": {...}}` envelope
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

/// `{"message": ..., "data": <id>}` returned on create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub data: i64,
}

/// `{"message": ...}` returned on update and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/v1/items - list non-deleted items, newest first
async fn list_items(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<ListResponse<ItemResponse>>, ApiError> {
    let page = Pagination::from(params);

    // Counts soft-deleted rows too, so `total` can exceed what the list shows
    let total = state.items.count_all().await?;
    let items = state.items.list_page(page).await?;

    Ok(Json(ListResponse {
        data: items.into_iter().map(ItemResponse::from).collect(),
        paging: Paging::new(page, total),
    }))
}

/// POST /api/v1/items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let title = ItemTitle::new(&req.title)?;
    let item = state
        .items
        .insert(NewItem::new(title, req.description, req.status))
        .await?;

    tracing::info!(id = item.id, "Item created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Item created successfully",
            data: item.id,
        }),
    ))
}

/// GET /api/v1/items/{id} - get a single item, deleted or not
async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<DataResponse<ItemResponse>>, ApiError> {
    let item = state.items.find_by_id(id).await?;
    Ok(Json(DataResponse {
        data: ItemResponse::from(item),
    }))
}

/// PUT /api/v1/items/{id} - apply a partial update
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = ItemPatch::try_from(req)?;
    state.items.update(id, &patch).await?;

    tracing::info!(id, "Item updated");

    Ok(Json(MessageResponse {
        message: "Item updated successfully",
    }))
}

/// DELETE /api/v1/items/{id} - soft delete
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.items.soft_delete(id).await?;

    tracing::info!(id, "Item soft-deleted");

    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/items", get(list_items).post(create_item))
        .route(
            "/api/v1/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
