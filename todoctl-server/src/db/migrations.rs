//! Schema setup for the item table

use sqlx::PgPool;

/// Create the item table and its status index if they don't exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running item migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS to_do_items (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'open',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_to_do_items_status ON to_do_items(status)")
        .execute(pool)
        .await?;

    tracing::info!("Item migrations complete");
    Ok(())
}
