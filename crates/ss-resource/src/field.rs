//! The `ResourceField`: dense per-cell resource storage.

use ss_core::Position;
use ss_grid::Grid;

use crate::{GrowthRule, ResourceCell};

/// One [`ResourceCell`] per position of a grid.
///
/// Cells are stored densely in the grid's column-major order (see
/// [`Grid::cell_index`]).  Positions outside the grid have no cell: reads
/// return `None`/`0` and writes are ignored.
#[derive(Clone, Debug)]
pub struct ResourceField {
    grid:  Grid,
    cells: Vec<ResourceCell>,
}

impl ResourceField {
    /// An empty field (zero stock, zero capacity, no growth) over `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![ResourceCell::default(); grid.cell_count()],
        }
    }

    /// The grid this field was laid out for.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell(&self, p: Position) -> Option<&ResourceCell> {
        self.grid.cell_index(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn cell_mut(&mut self, p: Position) -> Option<&mut ResourceCell> {
        self.grid.cell_index(p).map(|i| &mut self.cells[i])
    }

    /// Current stock at `p`; `0` outside the grid.
    #[inline]
    pub fn amount_at(&self, p: Position) -> u32 {
        self.cell(p).map_or(0, |c| c.amount)
    }

    /// Take the whole stock at `p`, leaving it empty.
    pub fn harvest(&mut self, p: Position) -> u32 {
        self.cell_mut(p).map_or(0, ResourceCell::harvest)
    }

    /// Add `amount` to both the stock and the capacity of every listed cell
    /// and give it `growth`.
    ///
    /// Overlapping calls stack, so depositing concentric circles builds a
    /// peak.  Points outside the grid are skipped.
    pub fn deposit<I>(&mut self, points: I, amount: u32, growth: GrowthRule)
    where
        I: IntoIterator<Item = Position>,
    {
        for p in points {
            if let Some(cell) = self.cell_mut(p) {
                cell.amount = cell.amount.saturating_add(amount);
                cell.capacity = cell.capacity.saturating_add(amount);
                cell.growth = growth;
            }
        }
    }

    /// Apply one regrowth step to every cell.
    pub fn regrow(&mut self) {
        for cell in &mut self.cells {
            cell.update();
        }
    }

    /// Sum of all stock on the field.
    pub fn total_amount(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.amount)).sum()
    }

    /// `(position, cell)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &ResourceCell)> + '_ {
        self.grid.all_points().zip(self.cells.iter())
    }
}
