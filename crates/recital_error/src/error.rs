//! Top-level error wrapper types.

use crate::{ConfigError, FlowError, GeneratorError, IoError, PipelineError};

/// This is the foundation error enum, composing the concern-specific error
/// types carried by the Recital crates.
///
/// # Examples
///
/// ```
/// use recital_error::{RecitalError, IoError};
///
/// let io_err = IoError::new("Failed to write output/summary.md");
/// let err: RecitalError = io_err.into();
/// assert!(format!("{}", err).contains("IO Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RecitalErrorKind {
    /// Filesystem error
    #[from(IoError)]
    Io(IoError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Flow log data error
    #[from(FlowError)]
    Flow(FlowError),
    /// Text-generation backend error
    #[from(GeneratorError)]
    Generator(GeneratorError),
    /// Pipeline contract violation
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Recital error with kind discrimination.
///
/// # Examples
///
/// ```
/// use recital_error::{RecitalResult, ConfigError};
///
/// fn might_fail() -> RecitalResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Recital Error: {}", _0)]
pub struct RecitalError(Box<RecitalErrorKind>);

impl RecitalError {
    /// Create a new error from a kind.
    pub fn new(kind: RecitalErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RecitalErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to RecitalErrorKind
impl<T> From<T> for RecitalError
where
    T: Into<RecitalErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Recital operations.
///
/// # Examples
///
/// ```
/// use recital_error::{RecitalResult, GeneratorError, GeneratorErrorKind};
///
/// fn fetch_completion() -> RecitalResult<String> {
///     Err(GeneratorError::new(GeneratorErrorKind::EmptyResponse))?
/// }
/// ```
pub type RecitalResult<T> = std::result::Result<T, RecitalError>;
