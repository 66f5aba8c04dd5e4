//! Grid error type.

use thiserror::Error;

/// Errors produced by `ss-grid`.
///
/// Leaving the grid is not one of them: [`Grid::move_by`][crate::Grid::move_by]
/// reports that as `None`.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid dimensions {length} x {height} are invalid (each side must be in 1..=i32::MAX)")]
    InvalidDimensions { length: u32, height: u32 },

    #[error("norm parameter p = {0} is invalid (must be 0, positive, or +inf)")]
    InvalidNorm(f64),
}

pub type GridResult<T> = Result<T, GridError>;
