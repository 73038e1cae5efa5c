//! Flow data errors.
//!
//! Structural errors in the recorded flow log. These are fail-fast: the
//! downstream stages assume positional alignment with no gaps, so a single
//! malformed record aborts the whole run rather than dropping the record.

/// Specific error conditions for flow log processing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FlowErrorKind {
    /// Failed to read the flow log file
    #[display("Failed to read flow file: {}", _0)]
    FileRead(String),
    /// Failed to parse the flow log JSON
    #[display("Failed to parse flow JSON: {}", _0)]
    JsonParse(String),
    /// Captured event has no usable identifier field
    #[display(
        "Captured event at position {} (type '{}') has no identifier field",
        position,
        event_type
    )]
    MalformedEvent {
        /// Position of the event in the capturedEvents sequence
        position: usize,
        /// Type tag of the offending event
        event_type: String,
    },
    /// A variant-required field is absent from the source step
    #[display(
        "Step at position {} (type '{}') is missing required field '{}'",
        position,
        step_type,
        field
    )]
    MissingRequiredField {
        /// Position of the step in the steps sequence
        position: usize,
        /// Type tag of the offending step
        step_type: &'static str,
        /// Human-readable name of the missing field
        field: &'static str,
    },
}

/// Error type for flow log processing.
///
/// # Examples
///
/// ```
/// use recital_error::{FlowError, FlowErrorKind};
///
/// let err = FlowError::new(FlowErrorKind::MalformedEvent {
///     position: 3,
///     event_type: "scroll".to_string(),
/// });
/// assert!(format!("{}", err).contains("no identifier field"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Flow Error: {} at line {} in {}", kind, line, file)]
pub struct FlowError {
    /// The specific error condition
    pub kind: FlowErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl FlowError {
    /// Create a new FlowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FlowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
