//! Unit tests for ss-resource.

use ss_core::Position;
use ss_grid::{Grid, Norm};

use crate::{GrowthRule, ResourceCell, ResourceField};

fn field_5x5() -> ResourceField {
    ResourceField::new(Grid::torus(5, 5).unwrap())
}

#[cfg(test)]
mod cell {
    use super::*;

    #[test]
    fn no_growth_stays_put() {
        let mut c = ResourceCell::new(1, 4, GrowthRule::None);
        c.update();
        assert_eq!(c.amount, 1);
    }

    #[test]
    fn constant_growth_is_capped() {
        let mut c = ResourceCell::new(0, 5, GrowthRule::Constant(2));
        c.update();
        assert_eq!(c.amount, 2);
        c.update();
        c.update();
        assert_eq!(c.amount, 5);
    }

    #[test]
    fn infinite_growth_snaps_to_capacity() {
        let mut c = ResourceCell::new(0, 7, GrowthRule::Infinite);
        c.update();
        assert_eq!(c.amount, 7);
    }

    #[test]
    fn custom_growth() {
        fn half_gap(a: u32, c: u32) -> u32 {
            (c - a).div_ceil(2)
        }
        let mut c = ResourceCell::new(0, 8, GrowthRule::Custom(half_gap));
        c.update();
        assert_eq!(c.amount, 4);
        c.update();
        assert_eq!(c.amount, 6);
    }

    #[test]
    fn update_at_capacity_is_idempotent() {
        for rule in [GrowthRule::None, GrowthRule::Constant(3), GrowthRule::Infinite] {
            let mut c = ResourceCell::new(4, 4, rule);
            for _ in 0..10 {
                c.update();
                assert_eq!(c.amount, 4);
            }
        }
    }

    #[test]
    fn update_clamps_overfilled_cell() {
        let mut c = ResourceCell::new(9, 4, GrowthRule::None);
        c.update();
        assert_eq!(c.amount, 4);
    }

    #[test]
    fn huge_delta_saturates() {
        let mut c = ResourceCell::new(u32::MAX - 1, u32::MAX, GrowthRule::Constant(u32::MAX));
        c.update();
        assert!(c.is_full());
    }

    #[test]
    fn harvest_is_all_or_nothing() {
        let mut c = ResourceCell::new(3, 5, GrowthRule::Constant(1));
        assert_eq!(c.harvest(), 3);
        assert_eq!(c.amount, 0);
        assert_eq!(c.capacity, 5);
    }
}

#[cfg(test)]
mod field {
    use super::*;

    #[test]
    fn starts_empty() {
        let f = field_5x5();
        assert_eq!(f.len(), 25);
        assert_eq!(f.total_amount(), 0);
        assert_eq!(f.amount_at(Position::new(2, 2)), 0);
    }

    #[test]
    fn outside_grid_has_no_cell() {
        let mut f = field_5x5();
        assert!(f.cell(Position::new(5, 0)).is_none());
        assert_eq!(f.harvest(Position::new(-1, 0)), 0);
        f.deposit([Position::new(9, 9)], 3, GrowthRule::None);
        assert_eq!(f.total_amount(), 0);
    }

    #[test]
    fn concentric_deposits_stack_into_a_peak() {
        let mut f = field_5x5();
        let grid = *f.grid();
        let centre = Position::new(1, 1);
        for radius in 0..=2 {
            f.deposit(grid.circle(centre, radius, Norm::EUCLIDEAN), 1, GrowthRule::Constant(2));
        }
        assert_eq!(f.amount_at(centre), 3);
        assert_eq!(f.amount_at(Position::new(1, 2)), 2);
        assert_eq!(f.amount_at(Position::new(1, 0)), 2);
        assert_eq!(f.amount_at(Position::new(2, 2)), 1);
        assert_eq!(f.amount_at(Position::new(1, 3)), 1);
        // (1, 4) is two steps south of the centre across the seam.
        assert_eq!(f.amount_at(Position::new(1, 4)), 1);
        assert_eq!(f.amount_at(Position::new(3, 3)), 0);
        assert_eq!(f.cell(centre).unwrap().capacity, 3);
    }

    #[test]
    fn regrow_respects_bounds_everywhere() {
        let mut f = field_5x5();
        let grid = *f.grid();
        f.deposit(grid.all_points(), 4, GrowthRule::Constant(3));
        for p in grid.all_points().step_by(2) {
            f.harvest(p);
        }
        for _ in 0..5 {
            f.regrow();
            for (_, c) in f.iter() {
                assert!(c.amount <= c.capacity);
            }
        }
        assert_eq!(f.total_amount(), 100);
    }

    #[test]
    fn direct_cell_writes() {
        let mut f = field_5x5();
        let p = Position::new(4, 0);
        {
            let c = f.cell_mut(p).unwrap();
            c.amount = 2;
            c.capacity = 6;
            c.growth = GrowthRule::Infinite;
        }
        f.regrow();
        assert_eq!(f.amount_at(p), 6);
    }
}
