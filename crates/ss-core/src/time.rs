//! Step counter and run configuration.
//!
//! Time is a monotonically increasing `Tick`: the world's `t`, advanced once
//! at the end of every completed step.  Steps are synchronous rounds with no
//! wall-clock meaning.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance in place by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and handed to
/// `ss_sim::WorldBuilder::from_config`.  Population and resource layout are
/// not part of it: those are seeded by the application through the world's
/// API.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid extent along `x`.
    pub length: u32,

    /// Grid extent along `y`.
    pub height: u32,

    /// `true` for a torus, `false` for a bounded rectangle.
    pub wraparound: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Steps to simulate when the application runs to completion.
    pub total_steps: u64,
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// Number of cells on the configured grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.length as usize * self.height as usize
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            length:      50,
            height:      50,
            wraparound:  true,
            seed:        2,
            total_steps: 100,
        }
    }
}
