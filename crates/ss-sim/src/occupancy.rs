//! The occupancy index: who stands where, both ways round.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as AgentMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as AgentMap;

use ss_core::{AgentId, Position};
use ss_grid::Grid;

use crate::{SimError, SimResult};

/// Bijection between living agents and the cells they stand on.
///
/// `agent_at` is dense (one slot per grid cell, in [`Grid::cell_index`]
/// order); `position_of` is keyed by agent.  Every mutating method either
/// updates both halves or neither, so at the boundary of every call:
///
/// - every placed agent `a` has `agent_at(position_of(a)) == a`;
/// - every occupied cell `p` has `position_of(agent_at(p)) == p`;
/// - no two agents share a cell.
#[derive(Clone, Debug)]
pub struct OccupancyIndex {
    grid:        Grid,
    agent_at:    Vec<Option<AgentId>>,
    position_of: AgentMap<AgentId, Position>,
}

impl OccupancyIndex {
    /// An empty index over `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            agent_at:    vec![None; grid.cell_count()],
            position_of: AgentMap::default(),
        }
    }

    /// Number of placed agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.position_of.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position_of.is_empty()
    }

    /// The agent on `p`, if any.  `None` outside the grid.
    #[inline]
    pub fn agent_at(&self, p: Position) -> Option<AgentId> {
        self.grid.cell_index(p).and_then(|i| self.agent_at[i])
    }

    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Option<Position> {
        self.position_of.get(&agent).copied()
    }

    /// `true` for an in-grid cell nobody stands on.
    #[inline]
    pub fn is_vacant(&self, p: Position) -> bool {
        self.grid.cell_index(p).is_some_and(|i| self.agent_at[i].is_none())
    }

    /// All vacant cells in grid order.
    pub fn vacant_cells(&self) -> Vec<Position> {
        self.grid
            .all_points()
            .zip(&self.agent_at)
            .filter(|(_, slot)| slot.is_none())
            .map(|(p, _)| p)
            .collect()
    }

    /// Place a not-yet-placed `agent` on the vacant cell `p`.
    pub fn insert(&mut self, agent: AgentId, p: Position) -> SimResult<()> {
        let idx = self.grid.cell_index(p).ok_or(SimError::PositionOutsideGrid(p))?;
        if let Some(occupant) = self.agent_at[idx] {
            return Err(SimError::OccupiedPlacement { agent, position: p, occupant });
        }
        if self.position_of.contains_key(&agent) {
            return Err(SimError::Config(format!("{agent} is already placed")));
        }
        self.agent_at[idx] = Some(agent);
        self.position_of.insert(agent, p);
        Ok(())
    }

    /// Take `agent` off the grid, returning the cell it stood on.
    pub fn remove(&mut self, agent: AgentId) -> SimResult<Position> {
        let p = self.position_of.remove(&agent).ok_or(SimError::AgentNotFound(agent))?;
        if let Some(idx) = self.grid.cell_index(p) {
            self.agent_at[idx] = None;
        }
        Ok(p)
    }

    /// Move `agent` to `destination`.
    ///
    /// A no-op if it is already there.  Fails with
    /// [`SimError::OccupiedDestination`] if another agent holds the cell;
    /// callers are expected to have filtered those out beforehand.
    pub fn relocate(&mut self, agent: AgentId, destination: Position) -> SimResult<()> {
        let from = self.position_of(agent).ok_or(SimError::AgentNotFound(agent))?;
        if from == destination {
            return Ok(());
        }
        let to_idx = self
            .grid
            .cell_index(destination)
            .ok_or(SimError::PositionOutsideGrid(destination))?;
        if let Some(occupant) = self.agent_at[to_idx] {
            return Err(SimError::OccupiedDestination { agent, destination, occupant });
        }
        if let Some(from_idx) = self.grid.cell_index(from) {
            self.agent_at[from_idx] = None;
        }
        self.agent_at[to_idx] = Some(agent);
        self.position_of.insert(agent, destination);
        Ok(())
    }

    /// Check that both halves are mutual inverses.
    pub fn is_consistent(&self) -> bool {
        let occupied = self.agent_at.iter().filter(|slot| slot.is_some()).count();
        occupied == self.position_of.len()
            && self
                .position_of
                .iter()
                .all(|(&agent, &p)| self.agent_at(p) == Some(agent))
    }
}
