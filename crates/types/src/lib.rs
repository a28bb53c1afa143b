//! Shared types for the envyaml configuration loader
//!
//! This crate contains the raw document type and the error types shared by
//! the loader and its transport codec.

pub mod document;
pub mod error;

// Re-export commonly used types
pub use document::{DocumentSource, RawDocument};
pub use error::{ConfigError, LoaderError, Result, TransportError};
