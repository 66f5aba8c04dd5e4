//! Unit tests for ss-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_is_creation_order() {
        assert_eq!(AgentId::FIRST.next(), AgentId(1));
        assert!(AgentId(3) < AgentId(3).next());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod position {
    use crate::{CoreError, Direction, Position};

    #[test]
    fn from_slice_checks_arity() {
        assert_eq!(Position::try_from(&[1, 2][..]).unwrap(), Position::new(1, 2));
        assert_eq!(
            Position::try_from(&[1, 2, 3][..]),
            Err(CoreError::DimensionMismatch { expected: 2, got: 3 })
        );
        assert!(Direction::try_from(&[1][..]).is_err());
    }

    #[test]
    fn cardinals_are_unit_vectors() {
        for d in Direction::CARDINALS {
            assert_eq!(d.dx.abs() + d.dy.abs(), 1);
        }
        assert_eq!(Direction::NORTH, Direction::new(0, 1));
        assert_eq!(Direction::WEST, Direction::new(-1, 0));
    }

    #[test]
    fn scaled_widens_without_overflow() {
        let d = Direction::new(i32::MAX, -1);
        assert_eq!(d.scaled(2), (2 * i64::from(i32::MAX), -2));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, -1).to_string(), "(3, -1)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let mut t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        t.advance();
        assert_eq!(t, Tick(11));
        assert_eq!(t.to_string(), "T11");
    }

    #[test]
    fn config_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.cell_count(), 2_500);
        assert!(cfg.wraparound);
        assert_eq!(cfg.end_tick(), Tick(100));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn sample_is_distinct_and_bounded() {
        let mut rng = SimRng::new(3);
        let pop: Vec<u32> = (0..20).collect();
        let mut s = rng.sample(&pop, 20).unwrap();
        s.sort_unstable();
        assert_eq!(s, pop);
        assert!(rng.sample(&pop, 21).is_none());
        assert_eq!(rng.sample(&pop, 0).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn child_streams_follow_parent_seed() {
        let mut p1 = SimRng::new(77);
        let mut p2 = SimRng::new(77);
        let mut c1 = p1.child(1);
        let mut c2 = p2.child(1);
        for _ in 0..20 {
            assert_eq!(c1.random::<u64>(), c2.random::<u64>());
        }
        // The parent advanced identically too.
        assert_eq!(p1.random::<u64>(), p2.random::<u64>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}

#[cfg(test)]
mod dist {
    use crate::{CoreError, SampleWithoutReplacement, SimRng, Uniform};

    #[test]
    fn uniform_stays_in_range_and_repeats_with_seed() {
        let a: Vec<i32> = Uniform::new(1, 6, 42).unwrap().take(200).collect();
        let b: Vec<i32> = Uniform::new(1, 6, 42).unwrap().take(200).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn uniform_from_parent_rng() {
        let draw = |seed| {
            let mut parent = SimRng::new(seed);
            let a: Vec<u32> = Uniform::from_rng(1, 4, &mut parent).unwrap().take(100).collect();
            let b: Vec<u32> = Uniform::from_rng(1, 6, &mut parent).unwrap().take(100).collect();
            (a, b)
        };
        let (a, b) = draw(2);
        assert!(a.iter().all(|v| (1..=4).contains(v)));
        assert!(b.iter().all(|v| (1..=6).contains(v)));
        assert_eq!(draw(2), (a, b));
        let mut parent = SimRng::new(0);
        assert!(Uniform::from_rng(3u32, 2, &mut parent).is_err());
    }

    #[test]
    fn uniform_rejects_inverted_bounds() {
        assert!(matches!(Uniform::new(5u32, 1, 0), Err(CoreError::Config(_))));
    }

    #[test]
    fn sample_without_replacement_is_finite() {
        let pop: Vec<u32> = (0..100).collect();
        let mut drawn: Vec<u32> = SampleWithoutReplacement::new(&pop, 10, 1).unwrap().collect();
        assert_eq!(drawn.len(), 10);
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 10);
    }

    #[test]
    fn sample_without_replacement_too_large() {
        let pop = [1, 2, 3];
        assert_eq!(
            SampleWithoutReplacement::new(&pop, 4, 0).err(),
            Some(CoreError::SampleTooLarge { k: 4, population: 3 })
        );
    }
}
