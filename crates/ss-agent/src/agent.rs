//! Per-agent traits and state.

use std::collections::HashSet;

use ss_core::{AgentId, Position, SimRng};
use ss_grid::VisionStrategy;

use crate::{Landscape, forage};

/// Outcome of the eat phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vitals {
    /// Reserve still positive; the update continues.
    Alive,
    /// Reserve hit zero or below; the agent is now dead.
    Starved,
}

/// One forager.
///
/// `vision` and `metabolism` are fixed at creation.  `sugar` is the
/// reserve: it only drops to zero or below on the step the agent starves.
/// Death is terminal; the world drops dead agents from its population.
#[derive(Debug)]
pub struct Agent {
    id:         AgentId,
    vision:     Box<dyn VisionStrategy>,
    metabolism: u32,
    sugar:      i64,
    alive:      bool,
}

impl Agent {
    pub fn new(id: AgentId, vision: Box<dyn VisionStrategy>, metabolism: u32, sugar: u32) -> Self {
        Self {
            id,
            vision,
            metabolism,
            sugar: i64::from(sugar),
            alive: true,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn vision(&self) -> &dyn VisionStrategy {
        self.vision.as_ref()
    }

    #[inline]
    pub fn metabolism(&self) -> u32 {
        self.metabolism
    }

    #[inline]
    pub fn sugar(&self) -> i64 {
        self.sugar
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Eat phase: burn `metabolism` from the reserve.
    ///
    /// Marks the agent dead and returns [`Vitals::Starved`] once the reserve
    /// is no longer positive.  The caller deregisters it.
    pub fn metabolise(&mut self) -> Vitals {
        self.sugar -= i64::from(self.metabolism);
        if self.sugar <= 0 {
            self.alive = false;
            Vitals::Starved
        } else {
            Vitals::Alive
        }
    }

    /// Mark the agent dead without touching its reserve.
    #[inline]
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Cells this agent can see from `own`.
    #[inline]
    pub fn visible_points<L: Landscape + ?Sized>(&self, own: Position, land: &L) -> HashSet<Position> {
        self.vision.visible_points(land.grid(), own)
    }

    /// Move phase decision; see [`forage::choose_destination`].
    pub fn choose_destination<L: Landscape + ?Sized>(
        &self,
        own:  Position,
        land: &L,
        rng:  &mut SimRng,
    ) -> Position {
        forage::choose_destination(own, self.visible_points(own, land), land, rng)
    }

    /// Collect phase: bank a harvested stock.
    #[inline]
    pub fn collect(&mut self, harvest: u32) {
        self.sugar += i64::from(harvest);
    }
}
