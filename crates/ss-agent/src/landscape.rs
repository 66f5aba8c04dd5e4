//! Read-only world state lent to an agent while it decides where to move.

use ss_core::Position;
use ss_grid::Grid;

/// What an agent can observe about the world.
///
/// The world implements this over a borrow of its grid, occupancy index and
/// resource field for the duration of one agent's move phase.  Nothing here
/// mutates: relocation and harvesting are performed by the world afterwards.
pub trait Landscape {
    fn grid(&self) -> &Grid;

    /// `true` if no living agent stands on `p`.
    fn is_vacant(&self, p: Position) -> bool;

    /// Current resource stock at `p`.
    fn resource_at(&self, p: Position) -> u32;
}
