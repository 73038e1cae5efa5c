//! OpenAI-compatible chat-completions provider.

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

use recital_error::GeneratorError;

/// Result type for provider-internal operations.
pub type OpenAiResult<T> = std::result::Result<T, GeneratorError>;
