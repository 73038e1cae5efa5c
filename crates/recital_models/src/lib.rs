//! Text-generation provider integrations for Recital.
//!
//! This crate provides the [`OpenAiClient`], a client for OpenAI-compatible
//! chat-completions endpoints. The base URL is overridable, so any provider
//! speaking the same wire format can serve as the backend.
//!
//! # Example
//!
//! ```no_run
//! use recital_models::OpenAiClient;
//! use recital_interface::TextGenerator;
//! use recital_core::{GenerateRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new()?;
//! let request = GenerateRequest::new(vec![Message::user("Hello")]);
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAiClient};
