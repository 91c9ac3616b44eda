//! HashMap-backed map fixture shared by the test modules.

use std::collections::HashMap;

use ventgrid_core::{Cell, Cost, MapQuery};

/// Simple concrete map: every wall defaults to cost 1 (no surcharge),
/// vents and wall overrides are set explicitly per test.
pub(crate) struct GridMap {
    width: i32,
    height: i32,
    vertical_walls: HashMap<(i32, i32), Cost>,
    horizontal_walls: HashMap<(i32, i32), Cost>,
    vents: HashMap<Cell, (Cost, Vec<Cell>)>,
}

impl GridMap {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            vertical_walls: HashMap::new(),
            horizontal_walls: HashMap::new(),
            vents: HashMap::new(),
        }
    }

    /// Set the vertical wall between columns `x − 1` and `x` at row `y`.
    pub(crate) fn set_vertical_wall(&mut self, x: i32, y: i32, cost: Cost) {
        self.vertical_walls.insert((x, y), cost);
    }

    /// Set the horizontal wall between rows `y − 1` and `y` at column `x`.
    pub(crate) fn set_horizontal_wall(&mut self, x: i32, y: i32, cost: Cost) {
        self.horizontal_walls.insert((x, y), cost);
    }

    /// Declare `c` a vent with the given outbound cost and partners.
    pub(crate) fn set_vent(&mut self, c: Cell, cost: Cost, others: Vec<Cell>) {
        self.vents.insert(c, (cost, others));
    }

    /// Surround `c` with impassable walls on all four sides.
    pub(crate) fn enclose(&mut self, c: Cell) {
        self.set_vertical_wall(c.x, c.y, f64::INFINITY);
        self.set_vertical_wall(c.x + 1, c.y, f64::INFINITY);
        self.set_horizontal_wall(c.x, c.y, f64::INFINITY);
        self.set_horizontal_wall(c.x, c.y + 1, f64::INFINITY);
    }
}

impl MapQuery for GridMap {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn has_vent(&self, c: Cell) -> bool {
        self.vents.contains_key(&c)
    }

    fn vent_cost(&self, c: Cell) -> Cost {
        self.vents.get(&c).map_or(f64::INFINITY, |(cost, _)| *cost)
    }

    fn other_vent_positions(&self, c: Cell, buf: &mut Vec<Cell>) {
        if let Some((_, others)) = self.vents.get(&c) {
            buf.extend_from_slice(others);
        }
    }

    fn vertical_wall_cost(&self, x: i32, y: i32) -> Cost {
        self.vertical_walls.get(&(x, y)).copied().unwrap_or(1.0)
    }

    fn horizontal_wall_cost(&self, x: i32, y: i32) -> Cost {
        self.horizontal_walls.get(&(x, y)).copied().unwrap_or(1.0)
    }
}
