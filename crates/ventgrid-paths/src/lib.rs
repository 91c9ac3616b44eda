//! Shortest-path search for grid maps with directional walls and vents.
//!
//! Movement happens on a 2D grid where crossing the boundary between two
//! adjacent cells may carry a wall surcharge (or be blocked outright), and
//! where designated *vent* cells offer non-adjacent teleport edges at a
//! cost declared by the source vent. This crate provides:
//!
//! - **Dijkstra** shortest paths over that edge model ([`find_shortest_path`])
//! - a budgeted variant that abandons routes above a cost cap
//!   ([`find_shortest_path_within`])
//! - multi-source **cost maps** ([`cost_map`])
//! - a standalone per-move legality predicate ([`is_movement_blocked`])
//! - the raw per-edge cost function ([`step_cost`])
//!
//! All map data is read through [`MapQuery`]; the algorithms know nothing
//! about how walls or vents are stored. Every search allocates its own
//! frontier, distance map and predecessor map and drops them on return, so
//! concurrent searches over one shared map need no coordination.
//!
//! Outcomes are explicit values: an unreachable goal is the
//! [`PathError::Unreachable`] result, not a panic or a log line.

mod dijkstra;
mod distance;
mod edge;
mod frontier;
#[cfg(test)]
pub(crate) mod testmap;
mod validator;

pub use dijkstra::{
    Path, PathError, PathNode, cost_map, find_shortest_path, find_shortest_path_within,
};
pub use distance::manhattan;
pub use edge::step_cost;
pub use validator::is_movement_blocked;

pub use ventgrid_core::{Cell, Cost, IMPASSABLE, MapQuery, passable};
