//! Recital CLI binary.
//!
//! Turns a recorded flow log into a markdown walkthrough report.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_report};

    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Report {
            flow,
            output,
            describe_model,
            refine_model,
            summarize_model,
            no_retry,
            max_retries,
            retry_backoff_ms,
        } => {
            let options = cli::ReportOptions {
                flow,
                output,
                describe_model,
                refine_model,
                summarize_model,
                no_retry,
                max_retries,
                retry_backoff_ms,
            };
            run_report(options).await?;
        }
    }

    Ok(())
}
