//! **ventgrid-core** — foundational types for wall/vent-aware grid movement.
//!
//! This crate provides the value types and the read-only map capability
//! shared by the *ventgrid* ecosystem:
//!
//! - [`Cell`] — integer grid coordinate
//! - [`Cost`] — edge traversal cost with an [`IMPASSABLE`] sentinel
//! - [`MapQuery`] — the capability trait through which pathfinding reads
//!   grid bounds, directional wall costs and vent topology

pub mod cell;
pub mod cost;
pub mod map;

pub use cell::Cell;
pub use cost::{Cost, IMPASSABLE, passable};
pub use map::MapQuery;
