//! Vision strategies: which cells an agent can see from where it stands.

use std::collections::HashSet;
use std::fmt;

use ss_core::Position;

use crate::{Grid, Norm};

/// Pluggable per-agent vision.
///
/// Each agent carries its own boxed strategy, fixed at creation, so a
/// population may mix distances and shapes.  Implementations must return
/// distinct, in-grid positions; the agent's own cell may or may not be
/// included.
pub trait VisionStrategy: fmt::Debug + Send + Sync + 'static {
    fn visible_points(&self, grid: &Grid, position: Position) -> HashSet<Position>;
}

/// Vision over a grid circle of fixed radius and norm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularVision {
    pub distance: u32,
    pub norm:     Norm,
}

impl CircularVision {
    pub fn new(distance: u32, norm: Norm) -> Self {
        Self { distance, norm }
    }

    /// Classic sugarscape vision: straight lines N, E, S, W.
    pub fn cross(distance: u32) -> Self {
        Self::new(distance, Norm::Cross)
    }
}

impl VisionStrategy for CircularVision {
    #[inline]
    fn visible_points(&self, grid: &Grid, position: Position) -> HashSet<Position> {
        grid.circle(position, self.distance, self.norm)
    }
}

impl<V: VisionStrategy + ?Sized> VisionStrategy for Box<V> {
    #[inline]
    fn visible_points(&self, grid: &Grid, position: Position) -> HashSet<Position> {
        (**self).visible_points(grid, position)
    }
}
