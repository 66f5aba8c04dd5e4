//! The `Grid`: a rectangle of cells, optionally wrapped into a torus.

use std::collections::HashSet;
use std::fmt;

use ss_core::{Direction, Position};

use crate::{GridError, GridResult, Norm};

/// Immutable grid geometry.
///
/// Every position a `Grid` hands out satisfies `0 ≤ x < length` and
/// `0 ≤ y < height`.  On a bounded grid a computation that would leave the
/// rectangle yields `None` instead.
///
/// Cells are numbered column-major (`index = x * height + y`), matching the
/// order of [`all_points`](Self::all_points); dense per-cell stores
/// (resources, occupancy) index by [`cell_index`](Self::cell_index).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    length:     u32,
    height:     u32,
    wraparound: bool,
}

impl Grid {
    /// Build a `length × height` grid.
    ///
    /// Both sides must be non-zero and fit an `i32` coordinate.
    pub fn new(length: u32, height: u32, wraparound: bool) -> GridResult<Self> {
        let fits = |n: u32| n > 0 && i32::try_from(n).is_ok();
        if !fits(length) || !fits(height) {
            return Err(GridError::InvalidDimensions { length, height });
        }
        Ok(Self { length, height, wraparound })
    }

    /// A wraparound (toroidal) grid, the usual sugarscape topology.
    pub fn torus(length: u32, height: u32) -> GridResult<Self> {
        Self::new(length, height, true)
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn wraparound(&self) -> bool {
        self.wraparound
    }

    /// `length × height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.length as usize * self.height as usize
    }

    /// `true` if `p` lies inside the rectangle (no wrapping applied).
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        (0..self.length as i64).contains(&i64::from(p.x))
            && (0..self.height as i64).contains(&i64::from(p.y))
    }

    /// Dense column-major index of `p`, or `None` if `p` is outside.
    #[inline]
    pub fn cell_index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.height as usize + p.y as usize)
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    pub fn position_at(&self, index: usize) -> Option<Position> {
        if index >= self.cell_count() {
            return None;
        }
        let h = self.height as usize;
        // Both quotients are below a side length, which fits i32.
        Some(Position::new((index / h) as i32, (index % h) as i32))
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// Move `distance` steps along `direction` from `start`.
    ///
    /// On a torus the result is reduced modulo the grid size and is always
    /// a valid position.  On a bounded grid the result is `None` when it
    /// falls outside the rectangle.
    pub fn move_by(&self, start: Position, direction: Direction, distance: i32) -> Option<Position> {
        let (dx, dy) = direction.scaled(distance);
        let x = i64::from(start.x) + dx;
        let y = i64::from(start.y) + dy;
        let (len, hgt) = (i64::from(self.length), i64::from(self.height));

        let (x, y) = if self.wraparound {
            (x.rem_euclid(len), y.rem_euclid(hgt))
        } else if (0..len).contains(&x) && (0..hgt).contains(&y) {
            (x, y)
        } else {
            return None;
        };
        // In range [0, side) and sides fit i32.
        Some(Position::new(x as i32, y as i32))
    }

    /// All distinct cells within `radius` of `center` under `norm`.
    ///
    /// - [`Norm::Cross`]: `center` plus 1..=`radius` steps along each
    ///   cardinal direction.
    /// - [`Norm::Chebyshev`] / [`Norm::Lp`]: every offset of the
    ///   `[-radius, radius]²` box inside the ball, mapped east by `Δx` then
    ///   north by `Δy`.
    ///
    /// The result is a set: on a torus several offsets can land on one
    /// cell, and it must be counted once.  Offsets that leave a bounded grid
    /// contribute nothing.
    pub fn circle(&self, center: Position, radius: u32, norm: Norm) -> HashSet<Position> {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        let mut circle = HashSet::new();

        match norm {
            Norm::Cross => {
                circle.extend(self.move_by(center, Direction::EAST, 0));
                for direction in Direction::CARDINALS {
                    circle.extend((1..=r).filter_map(|d| self.move_by(center, direction, d)));
                }
            }
            Norm::Lp(_) | Norm::Chebyshev => {
                for dx in -r..=r {
                    for dy in -r..=r {
                        if !norm.contains(dx, dy, r) {
                            continue;
                        }
                        let point = self
                            .move_by(center, Direction::EAST, dx)
                            .and_then(|p| self.move_by(p, Direction::NORTH, dy));
                        circle.extend(point);
                    }
                }
            }
        }
        circle
    }

    /// Lp distance between two positions taken as plain coordinate pairs.
    ///
    /// No toroidal shortcut is applied, so on a torus this is not the
    /// shortest distance.  `p = +∞` gives the Chebyshev distance; `p` must
    /// otherwise be positive.
    pub fn distance(&self, a: Position, b: Position, p: f64) -> f64 {
        debug_assert!(p > 0.0, "distance needs p > 0, got {p}");
        let dx = (i64::from(a.x) - i64::from(b.x)).abs() as f64;
        let dy = (i64::from(a.y) - i64::from(b.y)).abs() as f64;
        if p == f64::INFINITY {
            dx.max(dy)
        } else if p == 2.0 {
            (dx * dx + dy * dy).sqrt()
        } else {
            (dx.powf(p) + dy.powf(p)).powf(p.recip())
        }
    }

    /// Euclidean [`distance`](Self::distance).
    #[inline]
    pub fn euclidean(&self, a: Position, b: Position) -> f64 {
        self.distance(a, b, 2.0)
    }

    /// Every cell, `x` outer and `y` inner.  Each call starts afresh.
    pub fn all_points(&self) -> impl Iterator<Item = Position> + use<> {
        // Sides fit i32 (checked in `new`).
        let (len, hgt) = (self.length as i32, self.height as i32);
        (0..len).flat_map(move |x| (0..hgt).map(move |y| Position::new(x, y)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topology = if self.wraparound { "wraparound" } else { "no wraparound" };
        write!(f, "Grid {topology}: {} x {}", self.length, self.height)
    }
}
