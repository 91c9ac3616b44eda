//! Shortest-path demo: a small ship deck with a priced wall, a sealed
//! corridor and a pair of vents, printed as an ASCII overlay.

use std::collections::HashMap;

use ventgrid_core::{Cell, Cost, IMPASSABLE, MapQuery};
use ventgrid_paths::{PathError, cost_map, find_shortest_path, is_movement_blocked};

/// Map backed by hash maps; walls default to cost 1 (free crossing).
struct DeckMap {
    width: i32,
    height: i32,
    vertical_walls: HashMap<(i32, i32), Cost>,
    horizontal_walls: HashMap<(i32, i32), Cost>,
    vents: HashMap<Cell, (Cost, Vec<Cell>)>,
}

impl DeckMap {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            vertical_walls: HashMap::new(),
            horizontal_walls: HashMap::new(),
            vents: HashMap::new(),
        }
    }
}

impl MapQuery for DeckMap {
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
        self.vents.get(&c).map_or(IMPASSABLE, |(cost, _)| *cost)
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

fn main() {
    let mut map = DeckMap::new(12, 6);

    // Seal the middle column except at the bottom row.
    for y in 0..5 {
        map.vertical_walls.insert((6, y), IMPASSABLE);
    }
    // A pricey doorway on the detour row.
    map.horizontal_walls.insert((6, 5), 4.0);
    // Vents in opposite corners.
    let vent_a = Cell::new(1, 1);
    let vent_b = Cell::new(10, 1);
    map.vents.insert(vent_a, (2.0, vec![vent_b]));
    map.vents.insert(vent_b, (2.0, vec![vent_a]));

    let start = Cell::new(0, 0);
    let goal = Cell::new(11, 0);

    match find_shortest_path(&map, start, goal) {
        Ok(path) => {
            println!("path {start} -> {goal}, cost {}:", path.cost);
            render(&map, &path.cells, start, goal);
        }
        Err(PathError::Unreachable) => println!("{goal} is unreachable from {start}"),
        Err(e) => println!("search failed: {e}"),
    }

    let probe = Cell::new(6, 2);
    println!(
        "\nstep (5,2) -> (6,2) blocked: {}",
        is_movement_blocked(&map, Cell::new(5, 2), probe)
    );
    println!(
        "teleport {vent_a} -> {vent_b} blocked: {}",
        is_movement_blocked(&map, vent_a, vent_b)
    );

    let reach = cost_map(&map, &[start], 4.0);
    println!("\n{} cells within cost 4 of {start}", reach.len());
}

fn render(map: &DeckMap, path: &[Cell], start: Cell, goal: Cell) {
    for y in 0..map.height() {
        let mut line = String::new();
        for x in 0..map.width() {
            let c = Cell::new(x, y);
            let ch = if c == start {
                'S'
            } else if c == goal {
                'G'
            } else if map.has_vent(c) {
                'V'
            } else if path.contains(&c) {
                '*'
            } else {
                '.'
            };
            line.push(ch);
        }
        println!("{line}");
    }
}
