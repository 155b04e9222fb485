//! Aggregate statistics command.

use crate::config::Settings;
use crate::stats;

pub async fn cmd_stats(settings: &Settings) -> anyhow::Result<()> {
    let ctx = settings.create_db_context();
    ctx.init_schema().await?;

    let documents = ctx.documents().get_all().await?;
    let stats = stats::aggregate(&documents);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
