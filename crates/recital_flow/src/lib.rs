//! Flow-to-summary pipeline.
//!
//! Converts a recorded user-interaction flow into a markdown report: a
//! bulleted list of user actions plus a prose summary. The stages, leaf
//! first:
//!
//! - [`build_event_index`]: lookup from captured-event identifiers to types
//! - [`extract_steps`]: filter the step sequence and normalize fields
//! - [`describe_steps`]: one sentence per step, via the backend
//! - [`refine_sentences`]: de-duplicate context across the list
//! - [`summarize_sentences`]: the final two-section document
//!
//! [`FlowPipeline`] runs them end to end over any [`TextGenerator`]
//! backend.
//!
//! [`TextGenerator`]: recital_interface::TextGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod describe;
mod extract;
mod index;
mod model;
mod pipeline;
mod refine;
mod report;
mod summarize;

pub use config::{GenerationConfig, ModelConfig, PipelineConfig, PipelineOptions};
pub use describe::describe_steps;
pub use extract::{ExtractedFields, ExtractedStep, extract_steps};
pub use index::{EventIndex, build_event_index};
pub use model::{
    CapturedEvent, ChapterStep, FlowRecording, Hotspot, ImageStep, NavigationPath, PageContext,
    Step, VideoStep,
};
pub use pipeline::FlowPipeline;
pub use refine::refine_sentences;
pub use report::{INTERACTIONS_HEADING, SUMMARY_HEADING, SummaryDocument};
pub use summarize::summarize_sentences;
