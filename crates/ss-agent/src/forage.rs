//! The move rule: richest visible vacant cell, nearest first, random ties.

use std::cmp::Ordering;
use std::collections::HashSet;

use ss_core::{Position, SimRng};

use crate::Landscape;

/// All elements of `items` that compare equal to the maximum under `cmp`,
/// in their original order.  Empty input gives an empty result.
pub fn best_by<T, F>(items: &[T], mut cmp: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(best) = items.iter().copied().max_by(&mut cmp) else {
        return vec![];
    };
    items
        .iter()
        .copied()
        .filter(|x| cmp(x, &best) == Ordering::Equal)
        .collect()
}

/// Visible cells nobody stands on, plus `own`.
///
/// `own` is always a candidate even though its occupant is the agent
/// itself.  The result is sorted so that later random choices depend only
/// on the RNG, never on hash-set iteration order.
pub fn vacant_candidates<L>(own: Position, visible: HashSet<Position>, land: &L) -> Vec<Position>
where
    L: Landscape + ?Sized,
{
    let mut candidates: Vec<Position> =
        visible.into_iter().filter(|&p| land.is_vacant(p)).collect();
    candidates.push(own);
    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

/// Pick the destination for an agent standing on `own`.
///
/// Candidates are ranked by resource stock (more is better), then by plain
/// Euclidean distance from `own` (nearer is better).  Every candidate tied
/// on both components is equally likely to be chosen.
pub fn choose_destination<L>(
    own:     Position,
    visible: HashSet<Position>,
    land:    &L,
    rng:     &mut SimRng,
) -> Position
where
    L: Landscape + ?Sized,
{
    let grid = land.grid();
    let ranked: Vec<(Position, u32, f64)> = vacant_candidates(own, visible, land)
        .into_iter()
        .map(|p| (p, land.resource_at(p), grid.euclidean(own, p)))
        .collect();

    let best = best_by(&ranked, |a, b| a.1.cmp(&b.1).then_with(|| b.2.total_cmp(&a.2)));
    rng.choose(&best).map_or(own, |&(p, _, _)| p)
}
