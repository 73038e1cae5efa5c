//! Recital - Flow-to-Summary Reports
//!
//! Recital converts a recorded user-interaction flow (UI steps plus captured
//! low-level events) into a human-readable markdown report: a bulleted list
//! of user actions and a short prose summary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use recital::{FlowPipeline, FlowRecording, OpenAiClient, PipelineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let recording = FlowRecording::from_file("data/flow.json")?;
//!     let pipeline = FlowPipeline::new(OpenAiClient::new()?, PipelineConfig::load()?);
//!     let document = pipeline.run(&recording).await?;
//!     std::fs::write("output/summary.md", document.to_markdown())?;
//!     Ok(())
//! }
//! ```
//!
//! The pipeline is generic over the [`TextGenerator`] trait, so any backend
//! speaking that interface can drive it. [`OpenAiClient`] covers
//! OpenAI-compatible chat-completions APIs; it reads `RECITAL_API_KEY` from
//! the environment.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use recital_core::{GenerateRequest, GenerateResponse, Message, Role};
pub use recital_error::{RecitalError, RecitalErrorKind, RecitalResult};
pub use recital_flow::{
    EventIndex, ExtractedFields, ExtractedStep, FlowPipeline, FlowRecording, PipelineConfig,
    Step, SummaryDocument, build_event_index, extract_steps,
};
pub use recital_interface::TextGenerator;
pub use recital_models::OpenAiClient;
