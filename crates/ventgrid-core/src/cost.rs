//! Traversal costs.
//!
//! Costs are non-negative reals. Positive infinity is the impassability
//! sentinel: an edge with infinite cost does not exist for search purposes.

/// An edge traversal cost.
pub type Cost = f64;

/// Sentinel cost meaning "this edge cannot be crossed".
pub const IMPASSABLE: Cost = f64::INFINITY;

/// Whether a cost denotes a crossable edge.
#[inline]
pub fn passable(c: Cost) -> bool {
    c.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impassable_is_not_passable() {
        assert!(!passable(IMPASSABLE));
        assert!(passable(0.0));
        assert!(passable(1.0));
        assert!(passable(1e12));
    }
}
