//! Pull-based trait feeds for population seeding.
//!
//! `World::add_agents` consumes one value per agent from each feed it is
//! given.  Any `IntoIterator` works (`std::iter::repeat(3)` for a constant);
//! the two feeds here cover the random cases a setup routine usually needs.
//! Each owns its own `SimRng`, so consuming a feed never perturbs the
//! world's stream.

use rand::distributions::Distribution;
use rand::distributions::uniform::SampleUniform;

use crate::{CoreError, CoreResult, SimRng};

// ── Uniform ───────────────────────────────────────────────────────────────────

/// Infinite feed of values drawn uniformly from `low..=high`.
pub struct Uniform<T: SampleUniform> {
    dist: rand::distributions::Uniform<T>,
    rng:  SimRng,
}

impl<T: SampleUniform + PartialOrd> Uniform<T> {
    /// Feed over the inclusive range `[low, high]`.
    ///
    /// Fails with [`CoreError::Config`] if `low > high`.
    pub fn new(low: T, high: T, seed: u64) -> CoreResult<Self> {
        if low > high {
            return Err(CoreError::Config("uniform feed: low bound exceeds high bound".into()));
        }
        Ok(Self {
            dist: rand::distributions::Uniform::new_inclusive(low, high),
            rng:  SimRng::new(seed),
        })
    }

    /// Like [`new`](Self::new) but draws its stream from a parent RNG.
    pub fn from_rng(low: T, high: T, parent: &mut SimRng) -> CoreResult<Self> {
        let mut feed = Self::new(low, high, 0)?;
        feed.rng = parent.child(1);
        Ok(feed)
    }
}

impl<T: SampleUniform> Iterator for Uniform<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.dist.sample(self.rng.inner()))
    }
}

// ── SampleWithoutReplacement ──────────────────────────────────────────────────

/// Finite feed yielding a uniform `k`-sample of `population`, once each.
pub struct SampleWithoutReplacement<T> {
    picked: std::vec::IntoIter<T>,
}

impl<T: Clone> SampleWithoutReplacement<T> {
    /// Fails with [`CoreError::SampleTooLarge`] if `k > population.len()`.
    pub fn new(population: &[T], k: usize, seed: u64) -> CoreResult<Self> {
        let mut rng = SimRng::new(seed);
        let picked = rng
            .sample(population, k)
            .ok_or(CoreError::SampleTooLarge { k, population: population.len() })?;
        Ok(Self { picked: picked.into_iter() })
    }
}

impl<T> Iterator for SampleWithoutReplacement<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.picked.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.picked.size_hint()
    }
}
