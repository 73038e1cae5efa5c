//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use recital_core::{GenerateRequest, GenerateResponse};
use recital_error::RecitalResult;

/// Core trait that all text-generation backends must implement.
///
/// This is the minimal text-in/text-out contract the pipeline depends on.
/// A request may name a model; backends without per-request model selection
/// may ignore it and use their configured default.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate model output for a text request.
    async fn generate(&self, req: &GenerateRequest) -> RecitalResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "mock").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request names none.
    fn model_name(&self) -> &str;
}
