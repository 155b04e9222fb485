//! One-off analysis of a local PDF file.

use std::path::Path;

use console::style;

use crate::config::Settings;
use crate::llm::LlmClient;
use crate::services::DocumentAnalyzer;

/// Run the full pipeline on a local file and print the analysis.
///
/// With `--no-store` the result is only printed; otherwise it is
/// persisted exactly like an HTTP upload.
pub async fn cmd_analyze(settings: &Settings, file: &Path, no_store: bool) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .map_err(|e| anyhow::anyhow!("could not read {}: {}", file.display(), e))?;
    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let llm = LlmClient::new(settings.llm.clone());
    let analyzer = DocumentAnalyzer::new(llm, settings.contract_detection, settings.preview_chars);
    let analyzed = analyzer.analyze(filename, &bytes).await?;

    println!(
        "{} {} ({} pages, {})",
        style("✓").green(),
        filename,
        analyzed.pages,
        analyzed.detected_type
    );
    println!("{}", serde_json::to_string_pretty(&analyzed.analysis)?);

    if !no_store {
        let ctx = settings.create_db_context();
        ctx.init_schema().await?;
        let id = ctx
            .documents()
            .save(
                filename,
                analyzed.pages,
                &analyzed.text_preview,
                analyzed.detected_type,
                &analyzed.stored,
            )
            .await?;
        println!("{} Stored as document {}", style("✓").green(), id);
    }

    Ok(())
}
