//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they surface it.

use thiserror::Error;

/// Errors produced by `ss-core` value constructors and feeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("expected {expected} coordinates, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("cannot sample {k} values from a population of {population}")]
    SampleTooLarge { k: usize, population: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ss-core`.
pub type CoreResult<T> = Result<T, CoreError>;
