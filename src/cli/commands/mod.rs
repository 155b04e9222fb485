//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod analyze;
mod init;
mod serve;
mod stats_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "docscope")]
#[command(about = "PDF document analysis and extraction service")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ./docscope.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Bind address: a port, a host, or host:port
        #[arg(short, long, default_value = "127.0.0.1:8000")]
        bind: String,
    },

    /// Analyze a local PDF file through the full pipeline
    Analyze {
        /// Path to the PDF file
        file: PathBuf,

        /// Print the analysis without persisting it
        #[arg(long)]
        no_store: bool,
    },

    /// Show aggregate statistics over stored documents
    Stats,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Init => init::cmd_init(&settings).await,
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
        Commands::Analyze { file, no_store } => {
            analyze::cmd_analyze(&settings, &file, no_store).await
        }
        Commands::Stats => stats_cmd::cmd_stats(&settings).await,
    }
}
