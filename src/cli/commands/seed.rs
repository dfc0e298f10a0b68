//! Seed command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let summary = crate::seed::seed(&store).await?;

    println!(
        "✓ Seeded {} episodes, {} guests and {} appearances",
        summary.episodes, summary.guests, summary.appearances
    );

    Ok(())
}
