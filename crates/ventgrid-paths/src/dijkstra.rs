use std::collections::HashMap;
use std::fmt;

use ventgrid_core::{Cell, Cost, IMPASSABLE, MapQuery, passable};

use crate::edge::step_cost;
use crate::frontier::Frontier;

/// A cell with its final search cost, as returned by [`cost_map`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub cell: Cell,
    pub cost: Cost,
}

/// A shortest path: the cell sequence from start to goal inclusive, plus
/// its total accumulated cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Cell>,
    pub cost: Cost,
}

/// Why a search produced no path. Both cases are ordinary outcomes the
/// caller handles; neither ever panics the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// Start or goal lies outside the grid bounds.
    InvalidInput,
    /// The wall and vent topology admits no finite-cost route. Expected for
    /// disconnected maps, not a usage error.
    Unreachable,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidInput => write!(f, "start or goal outside grid bounds"),
            PathError::Unreachable => write!(f, "no finite-cost path exists"),
        }
    }
}

impl std::error::Error for PathError {}

/// Find a minimum-cost path from `start` to `goal`.
///
/// Dijkstra over the wall/vent edge model: each 4-adjacent step is priced
/// by [`step_cost`], and every vent additionally offers teleport edges to
/// its partners at the source vent's declared cost. Equal-cost frontier
/// entries expand in insertion order, so identical inputs always yield the
/// identical path.
///
/// All search state is local to the call; the map is only read. The map
/// must not change between the bounds check and the last expansion, which
/// the `&M` borrow already guarantees for safe-Rust maps.
pub fn find_shortest_path<M: MapQuery>(map: &M, start: Cell, goal: Cell) -> Result<Path, PathError> {
    search(map, start, goal, IMPASSABLE)
}

/// Like [`find_shortest_path`], but abandons any route whose tentative
/// cost exceeds `max_cost`.
///
/// With an infinite budget the result is bit-identical to the unbounded
/// search; with a budget below the true path cost the result is
/// [`PathError::Unreachable`].
pub fn find_shortest_path_within<M: MapQuery>(
    map: &M,
    start: Cell,
    goal: Cell,
    max_cost: Cost,
) -> Result<Path, PathError> {
    search(map, start, goal, max_cost)
}

fn search<M: MapQuery>(
    map: &M,
    start: Cell,
    goal: Cell,
    max_cost: Cost,
) -> Result<Path, PathError> {
    if !map.in_bounds(start) || !map.in_bounds(goal) {
        return Err(PathError::InvalidInput);
    }

    let mut dist: HashMap<Cell, Cost> = HashMap::new();
    let mut prev: HashMap<Cell, Cell> = HashMap::new();
    let mut frontier = Frontier::new();
    let mut vent_buf: Vec<Cell> = Vec::new();

    dist.insert(start, 0.0);
    frontier.push(0.0, start);

    while let Some((c, u)) = frontier.pop_min() {
        // Lazy deletion: a record beaten by a later relaxation is a no-op.
        match dist.get(&u) {
            Some(&best) if c <= best => {}
            _ => continue,
        }

        if u == goal {
            return Ok(reconstruct(&prev, start, goal, c));
        }

        let mut relax = |v: Cell, candidate: Cost| {
            if candidate > max_cost {
                return;
            }
            match dist.get(&v) {
                Some(&d) if candidate >= d => {}
                _ => {
                    dist.insert(v, candidate);
                    prev.insert(v, u);
                    frontier.push(candidate, v);
                }
            }
        };

        for v in u.neighbors_4() {
            if !map.in_bounds(v) {
                continue;
            }
            let step = step_cost(map, u, v);
            if !passable(step) {
                continue;
            }
            relax(v, c + step);
        }

        if map.has_vent(u) {
            let vent = map.vent_cost(u);
            if passable(vent) {
                vent_buf.clear();
                map.other_vent_positions(u, &mut vent_buf);
                for &w in &vent_buf {
                    if map.in_bounds(w) {
                        relax(w, c + vent);
                    }
                }
            }
        }
    }

    Err(PathError::Unreachable)
}

/// Walk the predecessor chain goal→start and reverse it.
fn reconstruct(prev: &HashMap<Cell, Cell>, start: Cell, goal: Cell, cost: Cost) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        // Every finalized cell except the start has a predecessor.
        cur = prev[&cur];
        cells.push(cur);
    }
    cells.reverse();
    Path { cells, cost }
}

/// Compute a multi-source cost map over the wall/vent edge model.
///
/// Every source starts at cost 0; expansion stops once tentative costs
/// exceed `max_cost`. Returns each reached cell with its final cost, in
/// finalization (cheapest-first) order. Out-of-bounds sources are ignored.
pub fn cost_map<M: MapQuery>(map: &M, sources: &[Cell], max_cost: Cost) -> Vec<PathNode> {
    let mut dist: HashMap<Cell, Cost> = HashMap::new();
    let mut frontier = Frontier::new();
    let mut results: Vec<PathNode> = Vec::new();
    let mut vent_buf: Vec<Cell> = Vec::new();

    for &src in sources {
        if map.in_bounds(src) && !dist.contains_key(&src) {
            dist.insert(src, 0.0);
            frontier.push(0.0, src);
        }
    }

    while let Some((c, u)) = frontier.pop_min() {
        match dist.get(&u) {
            Some(&best) if c <= best => {}
            _ => continue,
        }

        results.push(PathNode { cell: u, cost: c });

        let mut relax = |v: Cell, candidate: Cost| {
            if candidate > max_cost {
                return;
            }
            match dist.get(&v) {
                Some(&d) if candidate >= d => {}
                _ => {
                    dist.insert(v, candidate);
                    frontier.push(candidate, v);
                }
            }
        };

        for v in u.neighbors_4() {
            if !map.in_bounds(v) {
                continue;
            }
            let step = step_cost(map, u, v);
            if !passable(step) {
                continue;
            }
            relax(v, c + step);
        }

        if map.has_vent(u) {
            let vent = map.vent_cost(u);
            if passable(vent) {
                vent_buf.clear();
                map.other_vent_positions(u, &mut vent_buf);
                for &w in &vent_buf {
                    if map.in_bounds(w) {
                        relax(w, c + vent);
                    }
                }
            }
        }
    }

    results
}
