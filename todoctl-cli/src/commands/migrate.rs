//! Schema migration command

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the item table if needed, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect_and_migrate().await?;
    pool.close().await;

    tracing::info!("Schema is up to date");
    Ok(())
}
