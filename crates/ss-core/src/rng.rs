//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`.  It backs the per-step permutation, the
//! tie-breaks of the forage rule and the initial placement sample, always
//! consumed in the same order on the single simulation thread.  Two worlds
//! built with the same seed and fed the same calls therefore produce
//! identical runs.
//!
//! Feeds that need their own stream (see [`crate::dist`]) derive a child
//! with [`SimRng::child`] or take their own seed; nothing in the workspace
//! touches a global or thread-local RNG.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.  Owned by the world, never shared.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs built this way are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Uniform sample of `k` distinct elements of `slice`, in random order.
    ///
    /// Returns `None` if `k > slice.len()`.
    pub fn sample<T: Clone>(&mut self, slice: &[T], k: usize) -> Option<Vec<T>> {
        if k > slice.len() {
            return None;
        }
        let picked = rand::seq::index::sample(&mut self.0, slice.len(), k);
        Some(picked.into_iter().map(|i| slice[i].clone()).collect())
    }
}
