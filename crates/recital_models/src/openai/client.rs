//! Client for OpenAI-compatible chat-completions APIs.

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use recital_core::{GenerateRequest, GenerateResponse};
use recital_error::{GeneratorError, GeneratorErrorKind, RecitalResult, RetryableError};
use recital_interface::TextGenerator;

use super::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::OpenAiResult;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for OpenAI-compatible chat-completions endpoints.
///
/// Reads the API key from the `RECITAL_API_KEY` environment variable and the
/// base URL from `RECITAL_BASE_URL` (optional; defaults to the OpenAI API).
/// Requests that name a model override the client's default.
///
/// Transient failures (408, 429, 5xx, timeouts) are retried with exponential
/// backoff and jitter; permanent failures surface immediately.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model_name: String,
    no_retry: bool,
    max_retries: Option<usize>,
    retry_backoff_ms: Option<u64>,
}

impl OpenAiClient {
    /// Create a new client with default retry behavior.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use recital_models::OpenAiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = OpenAiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "openai_client_new")]
    pub fn new() -> RecitalResult<Self> {
        Self::new_internal(false, None, None).map_err(Into::into)
    }

    /// Create a new client with retry configuration.
    ///
    /// # Arguments
    ///
    /// * `no_retry` - Disable automatic retry
    /// * `max_retries` - Override maximum retry attempts
    /// * `retry_backoff_ms` - Override initial backoff delay
    ///
    /// # Example
    ///
    /// ```no_run
    /// use recital_models::OpenAiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // Retry disabled
    /// let client = OpenAiClient::new_with_retry(true, None, None)?;
    ///
    /// // Custom retry limits
    /// let client = OpenAiClient::new_with_retry(false, Some(3), Some(1000))?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "openai_client_new_with_retry")]
    pub fn new_with_retry(
        no_retry: bool,
        max_retries: Option<usize>,
        retry_backoff_ms: Option<u64>,
    ) -> RecitalResult<Self> {
        Self::new_internal(no_retry, max_retries, retry_backoff_ms).map_err(Into::into)
    }

    /// Internal constructor that returns provider-specific errors.
    fn new_internal(
        no_retry: bool,
        max_retries: Option<usize>,
        retry_backoff_ms: Option<u64>,
    ) -> OpenAiResult<Self> {
        let api_key = env::var("RECITAL_API_KEY")
            .map_err(|_| GeneratorError::new(GeneratorErrorKind::MissingApiKey))?;

        let base_url = env::var("RECITAL_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeneratorError::new(GeneratorErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model_name: DEFAULT_MODEL.to_string(),
            no_retry,
            max_retries,
            retry_backoff_ms,
        })
    }

    /// Set the default model used when a request names none.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Send a single chat-completions request without retry.
    async fn send_chat(&self, payload: &ChatCompletionRequest) -> OpenAiResult<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::new(GeneratorErrorKind::Timeout(e.to_string()))
                } else {
                    GeneratorError::new(GeneratorErrorKind::ApiRequest(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::new(GeneratorErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            GeneratorError::new(GeneratorErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let text = completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeneratorError::new(GeneratorErrorKind::EmptyResponse));
        }

        Ok(text)
    }

    /// Internal generate method that returns provider-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> OpenAiResult<GenerateResponse> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        let model = req.model.clone().unwrap_or_else(|| self.model_name.clone());

        let payload = ChatCompletionRequest {
            model: model.clone(),
            messages: req.messages.iter().map(ChatMessage::from).collect(),
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };

        debug!(model = %model, messages = payload.messages.len(), "Sending chat-completions request");

        // First attempt outside the retry loop so the error can pick the strategy.
        let first_error = match self.send_chat(&payload).await {
            Ok(text) => return Ok(GenerateResponse::new(text)),
            Err(e) => e,
        };

        if self.no_retry || !first_error.is_retryable() {
            return Err(first_error);
        }

        let (mut initial_ms, mut max_retries, max_delay_secs) =
            first_error.retry_strategy_params();

        if let Some(override_backoff) = self.retry_backoff_ms {
            initial_ms = override_backoff;
        }
        if let Some(override_retries) = self.max_retries {
            max_retries = override_retries;
        }

        warn!(
            error = %first_error,
            model = %model,
            initial_backoff_ms = initial_ms,
            max_retries = max_retries,
            "Transient generation failure, retrying with backoff"
        );

        let retry_strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries);

        let text = Retry::spawn(retry_strategy, || async {
            match self.send_chat(&payload).await {
                Ok(text) => Ok(text),
                Err(e) => {
                    if e.is_retryable() {
                        warn!(error = %e, "Generation attempt failed, will retry");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    } else {
                        warn!(error = %e, "Permanent generation error, failing immediately");
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        })
        .await?;

        Ok(GenerateResponse::new(text))
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, req), fields(model = ?req.model, messages = req.messages.len()))]
    async fn generate(&self, req: &GenerateRequest) -> RecitalResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
