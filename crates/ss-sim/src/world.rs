//! The `World` struct and its step scheduler.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use ss_agent::{Agent, Landscape, Vitals};
use ss_core::{AgentId, Position, SimRng, Tick};
use ss_grid::{Grid, VisionStrategy};
use ss_resource::ResourceField;

use crate::{NoopObserver, OccupancyIndex, SimError, SimResult, WorldObserver};

// ── Landscape view ────────────────────────────────────────────────────────────

/// Read-only borrow of the world lent to one agent's move phase.
struct WorldView<'a> {
    grid:      &'a Grid,
    occupancy: &'a OccupancyIndex,
    resources: &'a ResourceField,
}

impl Landscape for WorldView<'_> {
    fn grid(&self) -> &Grid {
        self.grid
    }

    fn is_vacant(&self, p: Position) -> bool {
        self.occupancy.is_vacant(p)
    }

    fn resource_at(&self, p: Position) -> u32 {
        self.resources.amount_at(p)
    }
}

// ── Update outcome ────────────────────────────────────────────────────────────

/// What one agent update did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The agent starved in its eat phase and was removed from `position`.
    Starved { position: Position },
    /// The agent moved `from → to` (possibly the same cell) and banked
    /// `harvest`.
    Foraged { from: Position, to: Position, harvest: u32 },
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation: grid, resources, occupancy and the living population.
///
/// All shared mutable state is owned here and only changes through the
/// methods below.  Each [`step`](Self::step):
///
/// 1. snapshots the living agents (ascending id) and shuffles them with the
///    world RNG;
/// 2. updates them one at a time in that order (eat, move, collect), each
///    seeing the occupancy left by the agents before it, so no two agents
///    ever target the same cell;
/// 3. regrows every resource cell;
/// 4. advances `t`.
///
/// Create via [`World::new`] or [`WorldBuilder`][crate::WorldBuilder].
#[derive(Debug)]
pub struct World {
    grid:      Grid,
    resources: ResourceField,
    occupancy: OccupancyIndex,
    agents:    BTreeMap<AgentId, Agent>,
    next_id:   AgentId,
    t:         Tick,
    rng:       SimRng,
}

impl World {
    /// An empty world over `grid`.  `seed = None` draws the RNG seed from OS
    /// entropy, so such runs are not reproducible.
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(SimRng::from_entropy, SimRng::new);
        Self::from_parts(grid, ResourceField::new(grid), rng)
    }

    pub(crate) fn from_parts(grid: Grid, resources: ResourceField, rng: SimRng) -> Self {
        Self {
            grid,
            resources,
            occupancy: OccupancyIndex::new(grid),
            agents:    BTreeMap::new(),
            next_id:   AgentId::FIRST,
            t:         Tick::ZERO,
            rng,
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn resources(&self) -> &ResourceField {
        &self.resources
    }

    /// Mutable resource access for setup code seeding deposits.
    #[inline]
    pub fn resources_mut(&mut self) -> &mut ResourceField {
        &mut self.resources
    }

    #[inline]
    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    /// Completed steps so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.t
    }

    /// Number of living agents.
    #[inline]
    pub fn n_agents(&self) -> usize {
        self.occupancy.len()
    }

    #[inline]
    pub fn agent_at(&self, p: Position) -> Option<AgentId> {
        self.occupancy.agent_at(p)
    }

    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Option<Position> {
        self.occupancy.position_of(agent)
    }

    /// A living agent's traits and reserve.
    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    /// Living agents in ascending id order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Sum of the resource stock over all cells.
    pub fn total_resource(&self) -> u64 {
        self.resources.total_amount()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Create `n` agents on a uniform sample of `n` distinct vacant cells.
    ///
    /// Exactly `n` values are drawn from each feed.  Fails before creating
    /// anyone if a feed runs short, a metabolism is zero, or fewer than `n`
    /// cells are vacant.  Returns the new ids in creation order.
    pub fn add_agents<V, M, S>(
        &mut self,
        n:          usize,
        vision:     V,
        metabolism: M,
        sugar:      S,
    ) -> SimResult<Vec<AgentId>>
    where
        V: IntoIterator,
        V::Item: VisionStrategy,
        M: IntoIterator<Item = u32>,
        S: IntoIterator<Item = u32>,
    {
        let traits = Traits::draw(n, vision, metabolism, sugar)?;
        let vacant = self.occupancy.vacant_cells();
        let positions = self.rng.sample(&vacant, n).ok_or(
            SimError::InsufficientUnoccupiedCells { requested: n, available: vacant.len() },
        )?;
        self.register(traits, positions)
    }

    /// Create `n` agents on explicitly supplied cells.
    ///
    /// Like [`add_agents`](Self::add_agents), but the positions come from a
    /// feed.  Every position must be inside the grid, vacant, and distinct
    /// from the others in the batch.
    pub fn add_agents_at<V, M, S, P>(
        &mut self,
        n:          usize,
        vision:     V,
        metabolism: M,
        sugar:      S,
        positions:  P,
    ) -> SimResult<Vec<AgentId>>
    where
        V: IntoIterator,
        V::Item: VisionStrategy,
        M: IntoIterator<Item = u32>,
        S: IntoIterator<Item = u32>,
        P: IntoIterator<Item = Position>,
    {
        let traits = Traits::draw(n, vision, metabolism, sugar)?;
        let positions = take_exactly(n, positions, "position")?;

        // Validate the whole batch before touching the index.
        let mut claimed: BTreeMap<Position, AgentId> = BTreeMap::new();
        for (i, &p) in positions.iter().enumerate() {
            let agent = self.id_after(i);
            if !self.grid.contains(p) {
                return Err(SimError::PositionOutsideGrid(p));
            }
            let occupant = self.occupancy.agent_at(p).or_else(|| claimed.get(&p).copied());
            if let Some(occupant) = occupant {
                return Err(SimError::OccupiedPlacement { agent, position: p, occupant });
            }
            claimed.insert(p, agent);
        }
        self.register(traits, positions)
    }

    /// Deregister a living agent.  Removing an agent twice is an error.
    pub fn remove(&mut self, agent: AgentId) -> SimResult<Position> {
        self.living_mut(agent)?.kill();
        self.deregister(agent)
    }

    /// Move a living agent to `destination`.
    ///
    /// No-op if it already stands there; [`SimError::OccupiedDestination`]
    /// if another agent does.
    pub fn move_agent(&mut self, agent: AgentId, destination: Position) -> SimResult<()> {
        self.living_mut(agent)?;
        self.occupancy.relocate(agent, destination)
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// One agent's eat → move → collect.
    pub fn update_agent(&mut self, id: AgentId) -> SimResult<UpdateOutcome> {
        // ── eat ───────────────────────────────────────────────────────────
        if self.living_mut(id)?.metabolise() == Vitals::Starved {
            let position = self.deregister(id)?;
            debug!(tick = self.t.0, agent = id.0, %position, "agent starved");
            return Ok(UpdateOutcome::Starved { position });
        }

        // ── move ──────────────────────────────────────────────────────────
        let from = self.occupancy.position_of(id).ok_or(SimError::AgentNotFound(id))?;
        let agent = self.agents.get(&id).ok_or(SimError::AgentNotFound(id))?;
        let view = WorldView {
            grid:      &self.grid,
            occupancy: &self.occupancy,
            resources: &self.resources,
        };
        let to = agent.choose_destination(from, &view, &mut self.rng);
        self.occupancy.relocate(id, to)?;

        // ── collect ───────────────────────────────────────────────────────
        let here = self.occupancy.position_of(id).ok_or(SimError::AgentNotFound(id))?;
        let harvest = self.resources.harvest(here);
        self.living_mut(id)?.collect(harvest);

        trace!(tick = self.t.0, agent = id.0, %from, to = %here, harvest, "agent foraged");
        Ok(UpdateOutcome::Foraged { from, to: here, harvest })
    }

    /// Advance the world by one step.
    pub fn step(&mut self) -> SimResult<()> {
        self.step_observed(&mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_observed<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.t;
        observer.on_step_start(now);

        let mut order: Vec<AgentId> = self.agents.keys().copied().collect();
        self.rng.shuffle(&mut order);

        let mut starved = 0usize;
        for id in order {
            if let UpdateOutcome::Starved { position } = self.update_agent(id)? {
                starved += 1;
                observer.on_death(now, id, position);
            }
        }

        self.resources.regrow();
        debug!(
            tick = now.0,
            living = self.n_agents(),
            starved,
            resource = self.total_resource(),
            "step complete"
        );
        observer.on_step_end(now, self);
        self.t.advance();
        Ok(())
    }

    /// Run `steps` steps back to back.
    pub fn run(&mut self, steps: u64) -> SimResult<()> {
        self.run_observed(steps, &mut NoopObserver)
    }

    /// [`run`](Self::run) with observer callbacks.
    pub fn run_observed<O: WorldObserver>(&mut self, steps: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..steps {
            self.step_observed(observer)?;
        }
        observer.on_run_end(self.t);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The id the `i`-th agent of the next batch will get.
    fn id_after(&self, i: usize) -> AgentId {
        AgentId(self.next_id.0 + i as u32)
    }

    /// The agent behind `id`, or why it cannot be used.
    ///
    /// Ids are never reused, so an issued id without an entry belongs to an
    /// agent that has died.
    fn living_mut(&mut self, id: AgentId) -> SimResult<&mut Agent> {
        let issued = id < self.next_id;
        match self.agents.get_mut(&id) {
            Some(agent) if agent.is_alive() => Ok(agent),
            Some(_) => Err(SimError::DeadAgent(id)),
            None if issued => Err(SimError::DeadAgent(id)),
            None => Err(SimError::AgentNotFound(id)),
        }
    }

    /// Drop `id` from both the occupancy index and the population.
    fn deregister(&mut self, id: AgentId) -> SimResult<Position> {
        let position = self.occupancy.remove(id)?;
        self.agents.remove(&id);
        Ok(position)
    }

    /// Create and place a validated batch.
    fn register(&mut self, traits: Traits, positions: Vec<Position>) -> SimResult<Vec<AgentId>> {
        let mut ids = Vec::with_capacity(positions.len());
        for ((vision, metabolism, sugar), position) in traits.into_rows().zip(positions) {
            let id = self.next_id;
            self.occupancy.insert(id, position)?;
            self.agents.insert(id, Agent::new(id, vision, metabolism, sugar));
            self.next_id = id.next();
            ids.push(id);
        }
        debug!(tick = self.t.0, added = ids.len(), living = self.n_agents(), "agents placed");
        Ok(ids)
    }
}

// ── Feed helpers ──────────────────────────────────────────────────────────────

/// Traits for one batch, drawn from the feeds up front.
struct Traits {
    vision:     Vec<Box<dyn VisionStrategy>>,
    metabolism: Vec<u32>,
    sugar:      Vec<u32>,
}

impl Traits {
    fn draw<V, M, S>(n: usize, vision: V, metabolism: M, sugar: S) -> SimResult<Self>
    where
        V: IntoIterator,
        V::Item: VisionStrategy,
        M: IntoIterator<Item = u32>,
        S: IntoIterator<Item = u32>,
    {
        let vision = take_exactly(n, vision, "vision")?
            .into_iter()
            .map(|v| Box::new(v) as Box<dyn VisionStrategy>)
            .collect();
        let metabolism = take_exactly(n, metabolism, "metabolism")?;
        let sugar = take_exactly(n, sugar, "sugar")?;
        if metabolism.contains(&0) {
            return Err(SimError::Config("metabolism must be positive".into()));
        }
        Ok(Self { vision, metabolism, sugar })
    }

    fn into_rows(self) -> impl Iterator<Item = (Box<dyn VisionStrategy>, u32, u32)> {
        self.vision
            .into_iter()
            .zip(self.metabolism)
            .zip(self.sugar)
            .map(|((v, m), s)| (v, m, s))
    }
}

/// Pull exactly `n` values from `feed`, or report how far it got.
fn take_exactly<I: IntoIterator>(n: usize, feed: I, what: &'static str) -> SimResult<Vec<I::Item>> {
    let values: Vec<I::Item> = feed.into_iter().take(n).collect();
    if values.len() < n {
        return Err(SimError::SequenceExhausted { what, expected: n, got: values.len() });
    }
    Ok(values)
}
