//! Pipeline contract-violation errors.
//!
//! These cover cases where the text-generation backend answered, but the
//! answer broke the contract the pipeline depends on (list cardinality,
//! document structure). They fail loudly rather than being silently accepted.

/// Specific error conditions for pipeline stage contracts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Refiner returned a list of a different length than its input
    #[display(
        "Refined list has {} entries, expected {}",
        actual,
        expected
    )]
    RefinementCountMismatch {
        /// Number of sentences sent to the refiner
        expected: usize,
        /// Number of sentences parsed from the response
        actual: usize,
    },
    /// Summarizer altered the interaction list or omitted a section
    #[display("Summary document violates format contract: {}", _0)]
    SummaryFormatViolation(String),
}

/// Error type for pipeline contract violations.
///
/// # Examples
///
/// ```
/// use recital_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::RefinementCountMismatch {
///     expected: 3,
///     actual: 2,
/// });
/// assert!(format!("{}", err).contains("expected 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
