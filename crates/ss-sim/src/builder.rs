//! Fluent builder for constructing a [`World`].

use ss_core::{SimConfig, SimRng};
use ss_grid::Grid;
use ss_resource::ResourceField;

use crate::{SimError, SimResult, World};

/// Fluent builder for [`World`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                  |
/// |-------------------|------------------------------------------|
/// | `.seed(s)`        | OS entropy (run is not reproducible)     |
/// | `.resources(f)`   | `ResourceField::new(grid)` (all empty)   |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::from_config(&config)?
///     .resources(field)
///     .build()?;
/// world.add_agents(n, visions, metabolisms, sugars)?;
/// world.run(config.total_steps)?;
/// ```
pub struct WorldBuilder {
    grid:      Grid,
    seed:      Option<u64>,
    resources: Option<ResourceField>,
}

impl WorldBuilder {
    pub fn new(grid: Grid) -> Self {
        Self { grid, seed: None, resources: None }
    }

    /// Grid and seed from a run configuration.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        let grid = Grid::new(config.length, config.height, config.wraparound)?;
        Ok(Self::new(grid).seed(config.seed))
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from a pre-seeded resource field.  It must have been laid out
    /// for a grid of the same dimensions.
    pub fn resources(mut self, field: ResourceField) -> Self {
        self.resources = Some(field);
        self
    }

    /// Validate inputs and return an empty, ready-to-populate [`World`].
    pub fn build(self) -> SimResult<World> {
        let resources = match self.resources {
            Some(field) => {
                let fg = field.grid();
                if fg.length() != self.grid.length() || fg.height() != self.grid.height() {
                    return Err(SimError::DimensionMismatch {
                        field_length: fg.length(),
                        field_height: fg.height(),
                        grid_length:  self.grid.length(),
                        grid_height:  self.grid.height(),
                    });
                }
                field
            }
            None => ResourceField::new(self.grid),
        };

        let rng = self.seed.map_or_else(SimRng::from_entropy, SimRng::new);
        Ok(World::from_parts(self.grid, resources, rng))
    }
}
