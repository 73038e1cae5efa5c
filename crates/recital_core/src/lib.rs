//! Core data types for the Recital text-generation boundary.
//!
//! This crate provides the foundation data types shared by the generator
//! interface, the provider clients, and the flow pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;

pub use message::Message;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
