//! A single resource cell and its regrowth rule.

use std::fmt;

/// How a cell's stock grows between steps.
#[derive(Copy, Clone, Default)]
pub enum GrowthRule {
    /// Never grows back.
    #[default]
    None,
    /// Grows by a fixed amount per step.
    Constant(u32),
    /// Snaps straight back to capacity every step.
    Infinite,
    /// Any pure function `(amount, capacity) → delta`.
    Custom(fn(u32, u32) -> u32),
}

impl GrowthRule {
    /// Stock increase for a cell currently at `amount` of `capacity`.
    ///
    /// `Infinite` returns a delta that always reaches capacity.
    #[inline]
    pub fn delta(self, amount: u32, capacity: u32) -> u32 {
        match self {
            GrowthRule::None        => 0,
            GrowthRule::Constant(n) => n,
            GrowthRule::Infinite    => capacity.saturating_sub(amount),
            GrowthRule::Custom(f)   => f(amount, capacity),
        }
    }
}

impl fmt::Debug for GrowthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthRule::None        => write!(f, "None"),
            GrowthRule::Constant(n) => write!(f, "Constant({n})"),
            GrowthRule::Infinite    => write!(f, "Infinite"),
            GrowthRule::Custom(_)   => write!(f, "Custom(..)"),
        }
    }
}

/// Stock, capacity and regrowth rule of one grid cell.
///
/// Fields are public: setup code seeds deposits by writing them directly.
/// [`update`](Self::update) restores `amount ≤ capacity` even if such a
/// write overshot.
#[derive(Copy, Clone, Debug, Default)]
pub struct ResourceCell {
    pub amount:   u32,
    pub capacity: u32,
    pub growth:   GrowthRule,
}

impl ResourceCell {
    pub fn new(amount: u32, capacity: u32, growth: GrowthRule) -> Self {
        Self { amount, capacity, growth }
    }

    /// One regrowth step: `amount = min(capacity, amount + delta)`.
    #[inline]
    pub fn update(&mut self) {
        let delta = self.growth.delta(self.amount, self.capacity);
        self.amount = self.amount.saturating_add(delta).min(self.capacity);
    }

    /// Remove and return the whole stock.
    #[inline]
    pub fn harvest(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.amount >= self.capacity
    }
}
