//! Core error types for cashback-core.
//!
//! Decoding is the only fallible operation in the domain model; the variant
//! keeps the decoder's message intact so callers can surface it verbatim.

use thiserror::Error;

/// Errors produced by the cashback-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A card submission body was not valid JSON for the record shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
