use std::collections::BinaryHeap;

use ventgrid_core::{Cell, Cost};

/// A frontier entry: tentative cost, insertion sequence id, cell.
///
/// Ordered by cost ascending, then sequence id ascending. The id exists
/// solely to break cost ties into a strict total order, so equal-cost
/// records pop in insertion order; it is never reused and carries no other
/// meaning.
#[derive(Clone, Copy, Debug)]
struct Record {
    cost: Cost,
    seq: u64,
    cell: Cell,
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (cost, seq).
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of frontier records with lazy invalidation.
///
/// Duplicate entries for one cell are expected: relaxing a cell pushes a
/// fresh record rather than updating in place, and the search core discards
/// stale pops. This trades a larger heap for not maintaining a cell-to-heap
/// index, and must stay that way (see the search core's stale check).
pub(crate) struct Frontier {
    heap: BinaryHeap<Record>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert a record, allocating the next sequence id.
    pub(crate) fn push(&mut self, cost: Cost, cell: Cell) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Record { cost, seq, cell });
    }

    /// Remove and return the cheapest record, or `None` when empty.
    pub(crate) fn pop_min(&mut self) -> Option<(Cost, Cell)> {
        self.heap.pop().map(|r| (r.cost, r.cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_cost_order() {
        let mut f = Frontier::new();
        f.push(3.0, Cell::new(3, 0));
        f.push(1.0, Cell::new(1, 0));
        f.push(2.0, Cell::new(2, 0));
        assert_eq!(f.pop_min(), Some((1.0, Cell::new(1, 0))));
        assert_eq!(f.pop_min(), Some((2.0, Cell::new(2, 0))));
        assert_eq!(f.pop_min(), Some((3.0, Cell::new(3, 0))));
        assert_eq!(f.pop_min(), None);
    }

    #[test]
    fn cost_ties_pop_in_insertion_order() {
        let mut f = Frontier::new();
        f.push(1.5, Cell::new(0, 0));
        f.push(1.5, Cell::new(1, 0));
        f.push(1.5, Cell::new(2, 0));
        assert_eq!(f.pop_min(), Some((1.5, Cell::new(0, 0))));
        assert_eq!(f.pop_min(), Some((1.5, Cell::new(1, 0))));
        assert_eq!(f.pop_min(), Some((1.5, Cell::new(2, 0))));
    }

    #[test]
    fn duplicates_for_one_cell_are_kept() {
        let mut f = Frontier::new();
        let c = Cell::new(4, 4);
        f.push(5.0, c);
        f.push(2.0, c);
        assert_eq!(f.pop_min(), Some((2.0, c)));
        assert_eq!(f.pop_min(), Some((5.0, c)));
    }

    #[test]
    fn interleaved_pushes_keep_ordering() {
        let mut f = Frontier::new();
        f.push(2.0, Cell::new(0, 2));
        assert_eq!(f.pop_min(), Some((2.0, Cell::new(0, 2))));
        f.push(4.0, Cell::new(0, 4));
        f.push(3.0, Cell::new(0, 3));
        assert_eq!(f.pop_min(), Some((3.0, Cell::new(0, 3))));
        f.push(1.0, Cell::new(0, 1));
        assert_eq!(f.pop_min(), Some((1.0, Cell::new(0, 1))));
        assert_eq!(f.pop_min(), Some((4.0, Cell::new(0, 4))));
        assert_eq!(f.pop_min(), None);
    }
}
