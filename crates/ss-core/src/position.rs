//! Grid coordinate and direction value types.
//!
//! Both are plain `(i32, i32)` pairs.  Neither knows anything about grid
//! size or wraparound: all topology lives in `ss_grid::Grid::move_by`, so a
//! `Position` compares and hashes purely by value.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell coordinate.  `x` grows east, `y` grows north.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl TryFrom<&[i32]> for Position {
    type Error = CoreError;

    fn try_from(coords: &[i32]) -> CoreResult<Self> {
        match *coords {
            [x, y] => Ok(Self { x, y }),
            _ => Err(CoreError::DimensionMismatch { expected: 2, got: coords.len() }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A displacement vector.  Usually one of the four cardinals, but any
/// integer vector is valid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(0, 1);
    pub const EAST:  Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(0, -1);
    pub const WEST:  Direction = Direction::new(-1, 0);

    /// N, E, S, W: the axes walked by cross-shaped vision.
    pub const CARDINALS: [Direction; 4] =
        [Direction::NORTH, Direction::EAST, Direction::SOUTH, Direction::WEST];

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// `self * distance` widened to `i64` so large distances cannot overflow.
    #[inline]
    pub fn scaled(self, distance: i32) -> (i64, i64) {
        (
            i64::from(self.dx) * i64::from(distance),
            i64::from(self.dy) * i64::from(distance),
        )
    }
}

impl From<(i32, i32)> for Direction {
    #[inline]
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

impl TryFrom<&[i32]> for Direction {
    type Error = CoreError;

    fn try_from(coords: &[i32]) -> CoreResult<Self> {
        match *coords {
            [dx, dy] => Ok(Self { dx, dy }),
            _ => Err(CoreError::DimensionMismatch { expected: 2, got: coords.len() }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}
