//! DocScope - PDF document analysis and extraction service.
//!
//! Uploads PDFs, classifies them with keyword heuristics, extracts
//! structured data through an LLM, and stores the results for browsing
//! and aggregate statistics.

mod analysis;
mod classify;
mod cli;
mod config;
mod extract;
mod llm;
mod models;
mod repository;
mod schema;
mod server;
mod services;
mod stats;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "docscope=info"
    } else {
        "docscope=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
