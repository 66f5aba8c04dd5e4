//! `ss-sim` — the world orchestrator for the sugarscape simulation core.
//!
//! # Step loop
//!
//! ```text
//! for each step:
//!   ① Snapshot  — ids of all living agents, ascending.
//!   ② Permute   — one shuffle of the snapshot with the world RNG.
//!   ③ Update    — strictly one agent at a time, in permutation order:
//!                   eat     → metabolise; starved agents are deregistered
//!                   move    → richest vacant visible cell (nearest, then
//!                             random among ties); world relocates
//!                   collect → harvest the whole cell into the reserve
//!   ④ Regrow    — every resource cell, order irrelevant.
//!   ⑤ t += 1
//! ```
//!
//! Because updates are sequential, each agent sees the occupancy left by the
//! ones before it and never targets a freshly taken cell; a new permutation
//! each step keeps any id from a standing first-mover advantage.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash for the agent → position map.                    |
//! | `serde`   | Propagates serde derives to core and grid types.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ss_core::Position;
//! use ss_grid::{CircularVision, Grid};
//! use ss_sim::World;
//! use std::iter::repeat;
//!
//! let mut world = World::new(Grid::torus(50, 50)?, Some(2));
//! world.add_agents(400, repeat(CircularVision::cross(3)), repeat(2), repeat(5))?;
//! world.run(100)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use occupancy::OccupancyIndex;
pub use world::{UpdateOutcome, World};
