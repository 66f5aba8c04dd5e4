//! Unit tests for ss-agent.

use std::collections::{HashMap, HashSet};

use ss_core::{AgentId, Position, SimRng};
use ss_grid::{CircularVision, Grid, Norm};

use crate::{Agent, Landscape, Vitals, best_by, choose_destination, vacant_candidates};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Hand-built landscape: explicit stock and occupied cells.
struct MockLandscape {
    grid:     Grid,
    stock:    HashMap<Position, u32>,
    occupied: HashSet<Position>,
}

impl MockLandscape {
    fn new(grid: Grid) -> Self {
        Self { grid, stock: HashMap::new(), occupied: HashSet::new() }
    }

    fn with_stock(mut self, x: i32, y: i32, amount: u32) -> Self {
        self.stock.insert(Position::new(x, y), amount);
        self
    }

    fn with_occupant(mut self, x: i32, y: i32) -> Self {
        self.occupied.insert(Position::new(x, y));
        self
    }
}

impl Landscape for MockLandscape {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn is_vacant(&self, p: Position) -> bool {
        !self.occupied.contains(&p)
    }

    fn resource_at(&self, p: Position) -> u32 {
        self.stock.get(&p).copied().unwrap_or(0)
    }
}

fn agent(metabolism: u32, sugar: u32) -> Agent {
    Agent::new(AgentId(0), Box::new(CircularVision::cross(2)), metabolism, sugar)
}

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

// ── Vitals ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vitals {
    use super::*;

    #[test]
    fn metabolise_burns_reserve() {
        let mut a = agent(1, 3);
        assert_eq!(a.metabolise(), Vitals::Alive);
        assert_eq!(a.sugar(), 2);
        assert!(a.is_alive());
    }

    #[test]
    fn reaching_zero_starves() {
        let mut a = agent(3, 3);
        assert_eq!(a.metabolise(), Vitals::Starved);
        assert!(!a.is_alive());
        assert_eq!(a.sugar(), 0);
    }

    #[test]
    fn reserve_may_go_negative_on_death() {
        let mut a = agent(4, 1);
        assert_eq!(a.metabolise(), Vitals::Starved);
        assert_eq!(a.sugar(), -3);
    }

    #[test]
    fn collect_adds_whole_harvest() {
        let mut a = agent(1, 3);
        a.collect(5);
        assert_eq!(a.sugar(), 8);
    }

    #[test]
    fn kill_keeps_reserve() {
        let mut a = agent(1, 3);
        a.kill();
        assert!(!a.is_alive());
        assert_eq!(a.sugar(), 3);
    }
}

// ── best_by ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod best {
    use super::*;

    #[test]
    fn keeps_every_tie_in_order() {
        assert_eq!(best_by(&[1, 2, 3, 4], |a, b| (a % 2).cmp(&(b % 2))), vec![1, 3]);
    }

    #[test]
    fn empty_input() {
        let empty: [u8; 0] = [];
        assert!(best_by(&empty, |a, b| a.cmp(b)).is_empty());
    }
}

// ── Candidates & choice ───────────────────────────────────────────────────────

#[cfg(test)]
mod forage {
    use super::*;

    #[test]
    fn occupied_cells_are_dropped_but_own_kept() {
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_occupant(5, 5)
            .with_occupant(5, 6);
        let visible: HashSet<Position> = [pos(5, 5), pos(5, 6), pos(5, 7)].into_iter().collect();
        assert_eq!(vacant_candidates(pos(5, 5), visible, &land), vec![pos(5, 5), pos(5, 7)]);
    }

    #[test]
    fn richest_cell_wins() {
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_stock(5, 7, 4)
            .with_stock(5, 6, 1)
            .with_occupant(5, 5);
        let a = agent(1, 3);
        let mut rng = SimRng::new(0);
        assert_eq!(a.choose_destination(pos(5, 5), &land, &mut rng), pos(5, 7));
    }

    #[test]
    fn nearest_breaks_resource_ties() {
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_stock(5, 7, 4)
            .with_stock(4, 5, 4)
            .with_occupant(5, 5);
        let a = agent(1, 3);
        for seed in 0..20 {
            let mut rng = SimRng::new(seed);
            assert_eq!(a.choose_destination(pos(5, 5), &land, &mut rng), pos(4, 5));
        }
    }

    #[test]
    fn stays_put_when_nothing_better() {
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_stock(5, 5, 2)
            .with_stock(5, 6, 2)
            .with_occupant(5, 5);
        let a = agent(1, 3);
        let mut rng = SimRng::new(1);
        assert_eq!(a.choose_destination(pos(5, 5), &land, &mut rng), pos(5, 5));
    }

    #[test]
    fn blocked_rich_cell_is_ignored() {
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_stock(5, 6, 9)
            .with_stock(5, 7, 1)
            .with_occupant(5, 5)
            .with_occupant(5, 6);
        let a = agent(1, 3);
        let mut rng = SimRng::new(2);
        assert_eq!(a.choose_destination(pos(5, 5), &land, &mut rng), pos(5, 7));
    }

    #[test]
    fn full_ties_are_all_reachable() {
        // Four equally rich cells at distance 1: every one must come up.
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_stock(5, 6, 3)
            .with_stock(6, 5, 3)
            .with_stock(5, 4, 3)
            .with_stock(4, 5, 3)
            .with_occupant(5, 5);
        let a = agent(1, 3);
        let mut rng = SimRng::new(7);
        let seen: HashSet<Position> = (0..200)
            .map(|_| a.choose_destination(pos(5, 5), &land, &mut rng))
            .collect();
        let expected: HashSet<Position> =
            [pos(5, 6), pos(6, 5), pos(5, 4), pos(4, 5)].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn same_seed_same_choice() {
        let land = MockLandscape::new(Grid::torus(10, 10).unwrap())
            .with_stock(5, 6, 3)
            .with_stock(6, 5, 3)
            .with_occupant(5, 5);
        let visible = Grid::torus(10, 10).unwrap().circle(pos(5, 5), 1, Norm::Cross);
        let pick = |seed| {
            let mut rng = SimRng::new(seed);
            choose_destination(pos(5, 5), visible.clone(), &land, &mut rng)
        };
        for seed in 0..10 {
            assert_eq!(pick(seed), pick(seed));
        }
    }
}
