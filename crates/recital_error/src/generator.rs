//! Text-generation backend errors and retry logic.

/// Specific error conditions for the text-generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeneratorErrorKind {
    /// API key not found in environment
    #[display("RECITAL_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create generator client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Request timed out
    #[display("Generation request timed out: {}", _0)]
    Timeout(String),
    /// The response carried no text content
    #[display("Generator returned an empty response")]
    EmptyResponse,
}

impl GeneratorErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeneratorErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeneratorErrorKind::Timeout(_) => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            GeneratorErrorKind::HttpError { status_code, .. } => match *status_code {
                429 => (5000, 3, 40),
                503 => (2000, 5, 60),
                500 | 502 | 504 => (1000, 3, 8),
                408 => (2000, 4, 30),
                _ => (2000, 5, 60),
            },
            GeneratorErrorKind::Timeout(_) => (2000, 4, 30),
            _ => (2000, 5, 60),
        }
    }
}

/// Generator error with source location tracking.
///
/// # Examples
///
/// ```
/// use recital_error::{GeneratorError, GeneratorErrorKind};
///
/// let err = GeneratorError::new(GeneratorErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("RECITAL_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generator Error: {} at line {} in {}", kind, line, file)]
pub struct GeneratorError {
    /// The kind of error that occurred
    pub kind: GeneratorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeneratorError {
    /// Create a new GeneratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeneratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// Transient errors like 503 (service unavailable), 429 (rate limit), or
/// network timeouts should report retryable. Permanent errors like 401
/// (unauthorized) or 400 (bad request) should not.
///
/// # Examples
///
/// ```
/// use recital_error::{GeneratorError, GeneratorErrorKind, RetryableError};
///
/// let err = GeneratorError::new(GeneratorErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// let (backoff, retries, max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 2000);
/// assert_eq!(retries, 5);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

impl RetryableError for GeneratorError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status_code: u16) -> GeneratorErrorKind {
        GeneratorErrorKind::HttpError {
            status_code,
            message: String::new(),
        }
    }

    #[test]
    fn transient_statuses_are_retryable() {
        for status in [408, 429, 500, 502, 503, 504] {
            assert!(http(status).is_retryable(), "{status} should retry");
        }
        assert!(GeneratorErrorKind::Timeout("deadline".to_string()).is_retryable());
    }

    #[test]
    fn permanent_failures_are_not_retryable() {
        for status in [400, 401, 403, 404, 422] {
            assert!(!http(status).is_retryable(), "{status} should not retry");
        }
        assert!(!GeneratorErrorKind::MissingApiKey.is_retryable());
        assert!(!GeneratorErrorKind::EmptyResponse.is_retryable());
    }

    #[test]
    fn rate_limits_back_off_longer_than_server_errors() {
        let (rate_limit_backoff, ..) = http(429).retry_strategy_params();
        let (server_error_backoff, ..) = http(500).retry_strategy_params();
        assert!(rate_limit_backoff > server_error_backoff);
    }
}
