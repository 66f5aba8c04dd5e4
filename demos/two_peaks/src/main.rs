//! two_peaks — the classic two-hill sugarscape.
//!
//! Two sugar peaks built from concentric Euclidean circles sit on opposite
//! diagonals of a 50×50 torus.  Every cell regrows to capacity each step.
//! 400 agents with random metabolism (1–4) and cross-shaped vision (1–6)
//! start on random cells with 3 sugar each and forage until the run ends.
//!
//! Usage:
//!
//! ```text
//! two_peaks [config.json]
//! RUST_LOG=debug two_peaks          # per-death and per-step engine events
//! ```
//!
//! The optional JSON file overrides any of the `SimConfig` fields
//! (`length`, `height`, `wraparound`, `seed`, `total_steps`); the peak
//! centres are scaled to the configured grid.

use std::iter::repeat;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ss_core::{AgentId, Position, SimConfig, SimRng, Tick, Uniform};
use ss_grid::{CircularVision, Norm};
use ss_resource::GrowthRule;
use ss_sim::{World, WorldBuilder, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:   usize    = 400;
const PEAK_RADII:    [u32; 4] = [0, 5, 10, 15];
const INITIAL_SUGAR: u32      = 3;
const METABOLISM:    (u32, u32) = (1, 4);
const VISION:        (u32, u32) = (1, 6);

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs one population line per step and tallies deaths.
#[derive(Default)]
struct PopulationLog {
    deaths: usize,
}

impl WorldObserver for PopulationLog {
    fn on_death(&mut self, _tick: Tick, _agent: AgentId, _position: Position) {
        self.deaths += 1;
    }

    fn on_step_end(&mut self, tick: Tick, world: &World) {
        let living = world.n_agents();
        let mean_sugar = if living == 0 {
            0.0
        } else {
            world.agents().map(|a| a.sugar() as f64).sum::<f64>() / living as f64
        };
        info!(
            %tick,
            living,
            deaths = self.deaths,
            sugar_on_grid = world.total_resource(),
            mean_sugar = format_args!("{mean_sugar:.2}"),
            "step"
        );
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        info!(%final_tick, deaths = self.deaths, "run finished");
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

/// Peak centres at 30% and 70% along each axis (15 and 35 on a 50×50 grid).
fn peak_centres(config: &SimConfig) -> [Position; 2] {
    // Sides fit i32 (checked by `Grid::new`), so any percentage of one does.
    let at = |side: u32, pct: u64| (u64::from(side) * pct / 100) as i32;
    [
        Position::new(at(config.length, 30), at(config.height, 30)),
        Position::new(at(config.length, 70), at(config.height, 70)),
    ]
}

fn build_world(config: &SimConfig) -> Result<World> {
    let mut world = WorldBuilder::from_config(config)?.build()?;

    let grid = *world.grid();
    for centre in peak_centres(config) {
        for radius in PEAK_RADII {
            let points = grid.circle(centre, radius, Norm::EUCLIDEAN);
            world.resources_mut().deposit(points, 1, GrowthRule::Infinite);
        }
    }
    info!(sugar = world.total_resource(), "sugar deposited");

    // Trait feeds draw from their own streams, split off one parent.
    let mut feeds = SimRng::new(config.seed);
    let metabolism = Uniform::from_rng(METABOLISM.0, METABOLISM.1, &mut feeds)?;
    let vision = Uniform::from_rng(VISION.0, VISION.1, &mut feeds)?.map(CircularVision::cross);
    let n = AGENT_COUNT.min(grid.cell_count());
    world.add_agents(n, vision, metabolism, repeat(INITIAL_SUGAR))?;
    Ok(world)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    info!(
        grid = %format_args!("{}x{}", config.length, config.height),
        wraparound = config.wraparound,
        seed = config.seed,
        steps = config.total_steps,
        "two_peaks"
    );

    let mut world = build_world(&config)?;
    info!(agents = world.n_agents(), "population placed");

    let mut obs = PopulationLog::default();
    let t0 = Instant::now();
    world.run_observed(config.total_steps, &mut obs)?;
    info!(elapsed_s = t0.elapsed().as_secs_f64(), survivors = world.n_agents(), "done");

    Ok(())
}
