//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Recital - Turn recorded user-interaction flows into markdown reports
#[derive(Parser, Debug)]
#[command(name = "recital")]
#[command(about = "Turn recorded user-interaction flows into markdown reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a walkthrough report from a recorded flow log
    Report {
        /// Path to the flow log JSON file
        #[arg(long, default_value = "data/flow.json")]
        flow: PathBuf,

        /// Path to write the markdown report to
        #[arg(long, default_value = "output/summary.md")]
        output: PathBuf,

        /// Override the model used for per-step description
        #[arg(long)]
        describe_model: Option<String>,

        /// Override the model used for list refinement
        #[arg(long)]
        refine_model: Option<String>,

        /// Override the model used for summarization
        #[arg(long)]
        summarize_model: Option<String>,

        /// Disable automatic retry of transient backend failures
        #[arg(long)]
        no_retry: bool,

        /// Override the maximum retry attempts for transient failures
        #[arg(long)]
        max_retries: Option<usize>,

        /// Override the initial retry backoff delay in milliseconds
        #[arg(long)]
        retry_backoff_ms: Option<u64>,
    },
}
