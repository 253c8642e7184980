//! Command implementations for todoctl CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;
use todoctl_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection arguments shared by every command that touches Postgres
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect and bring the schema up to date. Any failure is fatal for the caller.
    pub async fn connect_and_migrate(&self) -> Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.todoctl/.env")?;

        let pool = create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to connect to database")?;

        migrations::run(&pool)
            .await
            .context("Failed to migrate schema")?;

        Ok(pool)
    }
}
