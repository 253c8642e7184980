//! Item repository
//!
//! Every operation is a single statement:
//! - update and soft delete fold the existence check into the UPDATE
//!   (zero affected rows means not found)
//! - list excludes soft-deleted rows, count does not

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{ItemPatch, NewItem, Pagination, DELETED_STATUS};

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    pub fn is_deleted(&self) -> bool {
        self.status == DELETED_STATUS
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn item_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Item",
            id: id.to_string(),
        }
    }
}

/// Row-level operations on to-do items.
///
/// Handlers only see this trait; `PgItemRepo` is the production backend.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Insert a row, returning it with `id` and `created_at` assigned.
    async fn insert(&self, item: NewItem) -> Result<Item, DbError>;

    /// Fetch a row by id regardless of status.
    async fn find_by_id(&self, id: i64) -> Result<Item, DbError>;

    /// Apply the fields present in `patch` and stamp `updated_at`.
    async fn update(&self, id: i64, patch: &ItemPatch) -> Result<(), DbError>;

    /// Mark a row as deleted. Repeating it on a deleted row succeeds.
    async fn soft_delete(&self, id: i64) -> Result<(), DbError>;

    /// Count every row, soft-deleted ones included.
    async fn count_all(&self) -> Result<i64, DbError>;

    /// Non-deleted rows, newest id first.
    async fn list_page(&self, page: Pagination) -> Result<Vec<Item>, DbError>;
}

/// Postgres-backed item repository
#[derive(Clone)]
pub struct PgItemRepo {
    pool: PgPool,
}

impl PgItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemRepo {
    async fn insert(&self, item: NewItem) -> Result<Item, DbError> {
        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO to_do_items (title, description, status)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, status, created_at, updated_at
            "#,
        )
        .bind(item.title.as_str())
        .bind(&item.description)
        .bind(&item.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Item, DbError> {
        let item: Item = sqlx::query_as(
            r#"
            SELECT id, title, description, status, created_at, updated_at
            FROM to_do_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::item_not_found(id))?;

        Ok(item)
    }

    async fn update(&self, id: i64, patch: &ItemPatch) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE to_do_items
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title.as_ref().map(|t| t.as_str()))
        .bind(patch.description.as_deref())
        .bind(patch.status.as_deref())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::item_not_found(id));
        }
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE to_do_items
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(DELETED_STATUS)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::item_not_found(id));
        }
        Ok(())
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM to_do_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn list_page(&self, page: Pagination) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, title, description, status, created_at, updated_at
            FROM to_do_items
            WHERE status <> $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(DELETED_STATUS)
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::ItemTitle;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p todoctl-server -- --ignored

    async fn repo() -> PgItemRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migration failed");
        PgItemRepo::new(pool)
    }

    fn new_item(title: &str) -> NewItem {
        NewItem::new(ItemTitle::new(title).unwrap(), None, None)
    }

    #[test]
    fn deleted_status_detection() {
        let mut item = Item {
            id: 1,
            title: "Buy milk".into(),
            description: String::new(),
            status: "open".into(),
            created_at: Utc::now(),
            updated_at: None,
        };
        assert!(!item.is_deleted());

        item.status = DELETED_STATUS.into();
        assert!(item.is_deleted());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_find() {
        let repo = repo().await;
        let created = repo.insert(new_item("Buy milk")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found.title, "Buy milk");
        assert_eq!(found.status, "open");
        assert!(found.updated_at.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_touches_only_given_fields() {
        let repo = repo().await;
        let created = repo
            .insert(NewItem::new(
                ItemTitle::new("Write report").unwrap(),
                Some("quarterly".into()),
                None,
            ))
            .await
            .unwrap();

        let patch = ItemPatch {
            status: Some("done".into()),
            ..ItemPatch::default()
        };
        repo.update(created.id, &patch).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found.title, "Write report");
        assert_eq!(found.description, "quarterly");
        assert_eq!(found.status, "done");
        assert!(found.updated_at.is_some());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn soft_delete_hides_from_list_but_not_lookup() {
        let repo = repo().await;
        let created = repo.insert(new_item("Throw away")).await.unwrap();

        repo.soft_delete(created.id).await.unwrap();
        // Second delete is a no-op update
        repo.soft_delete(created.id).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert!(found.is_deleted());

        let listed = repo.list_page(Pagination::normalize(1, 99)).await.unwrap();
        assert!(listed.iter().all(|item| item.id != created.id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_by_id_descending() {
        let repo = repo().await;
        let mut ids = Vec::new();
        for title in ["first", "second", "third"] {
            ids.push(repo.insert(new_item(title)).await.unwrap().id);
        }

        let listed: Vec<i64> = repo
            .list_page(Pagination::normalize(1, 99))
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .filter(|id| ids.contains(id))
            .collect();

        ids.reverse();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_rows_are_not_found() {
        let repo = repo().await;

        assert!(matches!(
            repo.find_by_id(i64::MAX).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.update(i64::MAX, &ItemPatch::default()).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.soft_delete(i64::MAX).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn count_includes_deleted_rows() {
        let repo = repo().await;
        let before = repo.count_all().await.unwrap();

        let created = repo.insert(new_item("Counted")).await.unwrap();
        repo.soft_delete(created.id).await.unwrap();

        let after = repo.count_all().await.unwrap();
        assert!(after > before);
    }
}
