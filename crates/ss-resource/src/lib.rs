//! `ss-resource` — the renewable resource ("sugar") layer.
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`cell`]  | `ResourceCell`, `GrowthRule`                          |
//! | [`field`] | `ResourceField`: one cell per grid position           |
//!
//! Regrowth is purely local: a cell's next amount depends only on its own
//! amount and capacity, so [`ResourceField::regrow`] may visit cells in any
//! order.

pub mod cell;
pub mod field;

#[cfg(test)]
mod tests;

pub use cell::{GrowthRule, ResourceCell};
pub use field::ResourceField;
