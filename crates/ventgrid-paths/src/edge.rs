use ventgrid_core::{Cell, Cost, IMPASSABLE, MapQuery, passable};

/// Cost of a single step from `from` to a 4-adjacent `to`.
///
/// Non-adjacent pairs (Manhattan distance != 1) are [`IMPASSABLE`]. For
/// adjacent pairs the wall on the crossed boundary is looked up: the
/// lookup key depends on travel direction but always resolves to the same
/// physical wall, so crossing costs the same both ways. An infinite wall
/// blocks the step; a finite wall cost `w` prices the step at
/// `1 + max(0, w − 1)` (a plain step costs 1).
///
/// Pure function of map state; performs no search.
pub fn step_cost<M: MapQuery>(map: &M, from: Cell, to: Cell) -> Cost {
    if from.manhattan(to) != 1 {
        return IMPASSABLE;
    }

    let dx = to.x - from.x;
    let wall = if dx != 0 {
        // Horizontal move: the vertical wall between the two columns.
        let x = if dx > 0 { to.x } else { from.x };
        map.vertical_wall_cost(x, from.y)
    } else {
        // Vertical move: the horizontal wall between the two rows.
        let y = if to.y > from.y { to.y } else { from.y };
        map.horizontal_wall_cost(from.x, y)
    };

    if !passable(wall) {
        return IMPASSABLE;
    }
    1.0 + (wall - 1.0).max(0.0)
}
