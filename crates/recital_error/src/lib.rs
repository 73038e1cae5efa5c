//! Error types for the Recital library.
//!
//! This crate provides the foundation error types used throughout the Recital
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use recital_error::{RecitalResult, IoError};
//!
//! fn write_report() -> RecitalResult<()> {
//!     Err(IoError::new("Permission denied"))?
//! }
//!
//! match write_report() {
//!     Ok(()) => println!("Written"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod flow;
mod generator;
mod io;
mod pipeline;

pub use config::ConfigError;
pub use error::{RecitalError, RecitalErrorKind, RecitalResult};
pub use flow::{FlowError, FlowErrorKind};
pub use generator::{GeneratorError, GeneratorErrorKind, RetryableError};
pub use io::IoError;
pub use pipeline::{PipelineError, PipelineErrorKind};
