use ventgrid_core::{Cell, MapQuery, passable};

use crate::edge::step_cost;

/// Whether a single proposed move from `from` to `to` is illegal.
///
/// A move to an out-of-bounds cell is always blocked. A non-adjacent move
/// is legal only when both endpoints are vents (the declared vent cost and
/// partner list are not consulted). An adjacent move is blocked exactly
/// when its [`step_cost`] is impassable.
///
/// O(1) plus the underlying map queries; performs no search, never errors.
pub fn is_movement_blocked<M: MapQuery>(map: &M, from: Cell, to: Cell) -> bool {
    if !map.in_bounds(to) {
        return true;
    }
    if from.manhattan(to) != 1 {
        return !(map.has_vent(from) && map.has_vent(to));
    }
    !passable(step_cost(map, from, to))
}
