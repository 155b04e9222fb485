//! Database initialization command.

use console::style;

use crate::config::Settings;

pub async fn cmd_init(settings: &Settings) -> anyhow::Result<()> {
    let ctx = settings.create_db_context();
    ctx.init_schema().await?;
    println!(
        "{} Database ready at {}",
        style("✓").green(),
        settings.database_path.display()
    );
    Ok(())
}
