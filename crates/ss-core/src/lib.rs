//! `ss-core` — foundational types for the sugarscape simulation core.
//!
//! This crate is a dependency of every other `ss-*` crate.  It has no `ss-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`position`]    | `Position`, `Direction` (plain integer value types)   |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `SimRng` (the single seeded world RNG)                |
//! | [`dist`]        | `Uniform`, `SampleWithoutReplacement` trait feeds     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod dist;
pub mod error;
pub mod ids;
pub mod position;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dist::{SampleWithoutReplacement, Uniform};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use position::{Direction, Position};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
