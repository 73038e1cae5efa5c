//! Report generation command handler.

use std::path::PathBuf;
use tracing::{info, instrument};

use recital_error::{IoError, RecitalResult};
use recital_flow::{FlowPipeline, FlowRecording, PipelineConfig};
use recital_models::OpenAiClient;

/// Options for the `report` command.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Path to the flow log JSON file.
    pub flow: PathBuf,
    /// Path to write the markdown report to.
    pub output: PathBuf,
    /// Override for the description model.
    pub describe_model: Option<String>,
    /// Override for the refinement model.
    pub refine_model: Option<String>,
    /// Override for the summarization model.
    pub summarize_model: Option<String>,
    /// Disable automatic retry.
    pub no_retry: bool,
    /// Override the maximum retry attempts.
    pub max_retries: Option<usize>,
    /// Override the initial retry backoff delay.
    pub retry_backoff_ms: Option<u64>,
}

/// Run the full pipeline over one flow log and write the report.
///
/// The report is written only after the whole pipeline succeeds; on any
/// failure no partial output lands on disk.
#[instrument(skip(options), fields(flow = %options.flow.display(), output = %options.output.display()))]
pub async fn run_report(options: ReportOptions) -> RecitalResult<()> {
    let mut config = PipelineConfig::load()?;
    if let Some(model) = options.describe_model {
        config.models.describe = model;
    }
    if let Some(model) = options.refine_model {
        config.models.refine = model;
    }
    if let Some(model) = options.summarize_model {
        config.models.summarize = model;
    }

    let recording = FlowRecording::from_file(&options.flow)?;
    info!(
        events = recording.captured_events.len(),
        steps = recording.steps.len(),
        "Loaded flow recording"
    );

    let client = OpenAiClient::new_with_retry(
        options.no_retry,
        options.max_retries,
        options.retry_backoff_ms,
    )?;
    let pipeline = FlowPipeline::new(client, config);
    let document = pipeline.run(&recording).await?;

    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                IoError::new(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    std::fs::write(&options.output, document.to_markdown()).map_err(|e| {
        IoError::new(format!(
            "Failed to write report to {}: {}",
            options.output.display(),
            e
        ))
    })?;

    info!(
        interactions = document.interactions().len(),
        output = %options.output.display(),
        "Report written"
    );
    Ok(())
}
