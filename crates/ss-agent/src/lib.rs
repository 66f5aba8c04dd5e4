//! `ss-agent` — agents and their decision rule.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`agent`]     | `Agent` (traits + reserve + alive flag), `Vitals`         |
//! | [`landscape`] | `Landscape` — read-only view of occupancy and resources   |
//! | [`forage`]    | candidate filtering, ranking and random tie-breaking      |
//!
//! # Design notes
//!
//! An agent never holds a reference to the world.  The world drives each
//! agent's update by id and lends it a [`Landscape`] for the move phase:
//!
//! 1. **eat** — [`Agent::metabolise`]; a starved agent is deregistered by
//!    the world and its update ends.
//! 2. **move** — [`Agent::choose_destination`] reads the landscape and the
//!    world's RNG; the world performs the relocation.
//! 3. **collect** — the world harvests the destination cell and hands the
//!    stock to [`Agent::collect`].
//!
//! Agents therefore never read or write each other; everything goes through
//! the world's occupancy and resource state.

pub mod agent;
pub mod forage;
pub mod landscape;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Vitals};
pub use forage::{best_by, choose_destination, vacant_candidates};
pub use landscape::Landscape;
