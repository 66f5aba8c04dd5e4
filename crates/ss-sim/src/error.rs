use ss_core::{AgentId, CoreError, Position};
use ss_grid::GridError;
use thiserror::Error;

/// Everything that can go wrong driving a [`World`][crate::World].
///
/// All variants are contract violations: none is retried, and an error out
/// of `step`/`run` leaves the run unusable.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("resource field is {field_length} x {field_height} but the grid is {grid_length} x {grid_height}")]
    DimensionMismatch {
        field_length: u32,
        field_height: u32,
        grid_length:  u32,
        grid_height:  u32,
    },

    #[error("{0} was never created")]
    AgentNotFound(AgentId),

    #[error("{0} is dead")]
    DeadAgent(AgentId),

    #[error("cannot move {agent} to {destination}: occupied by {occupant}")]
    OccupiedDestination {
        agent:       AgentId,
        destination: Position,
        occupant:    AgentId,
    },

    #[error("cannot place {agent} at {position}: occupied by {occupant}")]
    OccupiedPlacement {
        agent:    AgentId,
        position: Position,
        occupant: AgentId,
    },

    #[error("position {0} lies outside the grid")]
    PositionOutsideGrid(Position),

    #[error("cannot place {requested} agents: only {available} unoccupied cells")]
    InsufficientUnoccupiedCells { requested: usize, available: usize },

    #[error("{what} feed exhausted after {got} of {expected} values")]
    SequenceExhausted {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
