//! Trait definitions for the Recital flow summarization library.
//!
//! The pipeline treats the text-generation service as an opaque collaborator
//! behind the [`TextGenerator`] trait, so tests can substitute deterministic
//! mocks and providers can be swapped without touching the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::TextGenerator;
