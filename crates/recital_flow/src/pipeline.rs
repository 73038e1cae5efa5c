//! The flow-to-summary pipeline.
//!
//! A strict linear pipeline: raw log, event index, extracted steps, per-step
//! sentences, refined list, final document. Each stage is pure apart from
//! declared backend calls, and data flows strictly forward.

use tracing::{info, instrument};

use recital_error::RecitalResult;
use recital_interface::TextGenerator;

use crate::config::PipelineConfig;
use crate::describe::describe_steps;
use crate::extract::extract_steps;
use crate::index::build_event_index;
use crate::model::FlowRecording;
use crate::refine::refine_sentences;
use crate::report::SummaryDocument;
use crate::summarize::summarize_sentences;

/// Runs a flow recording through every stage to the final document.
///
/// Generic over the text-generation backend so tests can substitute a mock.
///
/// # Example
///
/// ```no_run
/// use recital_flow::{FlowPipeline, FlowRecording, PipelineConfig};
/// use recital_models::OpenAiClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let recording = FlowRecording::from_file("data/flow.json")?;
/// let pipeline = FlowPipeline::new(OpenAiClient::new()?, PipelineConfig::load()?);
/// let document = pipeline.run(&recording).await?;
/// println!("{}", document.to_markdown());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FlowPipeline<G> {
    generator: G,
    config: PipelineConfig,
}

impl<G: TextGenerator> FlowPipeline<G> {
    /// Build a pipeline around a backend and configuration.
    pub fn new(generator: G, config: PipelineConfig) -> Self {
        Self { generator, config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Consume the pipeline, returning its backend.
    pub fn into_generator(self) -> G {
        self.generator
    }

    /// Run the full pipeline over one recording.
    ///
    /// Fails fast on any structural or backend error; on failure no partial
    /// document is produced.
    #[instrument(
        skip(self, recording),
        fields(
            provider = self.generator.provider_name(),
            events = recording.captured_events.len(),
            steps = recording.steps.len(),
        )
    )]
    pub async fn run(&self, recording: &FlowRecording) -> RecitalResult<SummaryDocument> {
        let index = build_event_index(&recording.captured_events)?;
        let extracted = extract_steps(&recording.steps, &index)?;
        info!(
            indexed_events = index.len(),
            extracted_steps = extracted.len(),
            "Extracted relevant steps from recording"
        );

        let sentences = describe_steps(&self.generator, &extracted, &self.config).await?;
        let refined = refine_sentences(&self.generator, &sentences, &self.config).await?;
        let document = summarize_sentences(&self.generator, &refined, &self.config).await?;
        info!(interactions = document.interactions().len(), "Pipeline complete");
        Ok(document)
    }
}
