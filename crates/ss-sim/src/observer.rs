//! World observer trait for progress reporting and external rendering.

use ss_core::{AgentId, Position, Tick};

use crate::World;

/// Callbacks invoked by [`World::run_observed`] at key points of each step.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access; they
/// cannot influence the run.
///
/// # Example: population printer
///
/// ```rust,ignore
/// struct Population;
///
/// impl WorldObserver for Population {
///     fn on_step_end(&mut self, tick: Tick, world: &World) {
///         println!("{tick}: {} agents", world.n_agents());
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the start of a step, before the permutation is drawn.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called when an agent starves during its eat phase.
    ///
    /// `position` is the cell it stood on, already vacated.
    fn on_death(&mut self, _tick: Tick, _agent: AgentId, _position: Position) {}

    /// Called after regrowth, before the step counter advances.
    fn on_step_end(&mut self, _tick: Tick, _world: &World) {}

    /// Called once after the last step of a `run_observed` call.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
