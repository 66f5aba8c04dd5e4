//! `ss-grid` — grid geometry, topology and vision for the sugarscape core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`grid`]   | `Grid`: bounded/wraparound `move_by`, circles, distances    |
//! | [`norm`]   | `Norm`: cross (`p = 0`), Lp, Chebyshev (`p = ∞`)            |
//! | [`vision`] | `VisionStrategy` trait, `CircularVision`                    |
//! | [`error`]  | `GridError`, `GridResult<T>`                                |
//!
//! # Topology in one place
//!
//! Positions are plain values (`ss_core::Position`).  Whether the grid is a
//! torus or a bounded rectangle only matters inside [`Grid::move_by`]; every
//! other operation (circles, vision) is built from it, so a bounded grid's
//! "no such position" result flows through naturally as `None`.

pub mod error;
pub mod grid;
pub mod norm;
pub mod vision;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use norm::Norm;
pub use vision::{CircularVision, VisionStrategy};
