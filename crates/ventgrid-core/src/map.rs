//! The [`MapQuery`] capability.
//!
//! Pathfinding never sees how a map stores its walls and vents; it reads
//! everything through this trait. Implementations live with the game's map
//! data, outside this workspace's concern.

use crate::cell::Cell;
use crate::cost::Cost;

/// Read-only view of a grid map's bounds, walls and vents.
///
/// The map is assumed stable for the duration of one search call. The
/// `&self` receivers make concurrent reads safe; mutating the underlying
/// storage mid-search is the caller's bug to prevent (in safe Rust the
/// borrow checker already does).
pub trait MapQuery {
    /// Grid width in cells. Positive.
    fn width(&self) -> i32;

    /// Grid height in cells. Positive.
    fn height(&self) -> i32;

    /// Whether `c` lies inside `[0, width) × [0, height)`.
    #[inline]
    fn in_bounds(&self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.width() && c.y >= 0 && c.y < self.height()
    }

    /// Whether the cell at `c` is a vent.
    fn has_vent(&self, c: Cell) -> bool;

    /// Outbound teleport cost of the vent at `c`.
    ///
    /// Meaningful only when [`has_vent`](Self::has_vent) is true. Teleport
    /// edges are priced by the *source* vent alone, so A→B and B→A may
    /// cost differently when the two vents declare different costs.
    fn vent_cost(&self, c: Cell) -> Cost;

    /// Append the teleport partners of the vent at `c` into `buf`.
    /// The caller clears `buf` before calling.
    fn other_vent_positions(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Cost of the vertical wall between columns `x − 1` and `x` at row
    /// `y`. Finite values are a surcharge, [`IMPASSABLE`](crate::IMPASSABLE)
    /// blocks the edge in both directions.
    fn vertical_wall_cost(&self, x: i32, y: i32) -> Cost;

    /// Cost of the horizontal wall between rows `y − 1` and `y` at column
    /// `x`. Same semantics as [`vertical_wall_cost`](Self::vertical_wall_cost).
    fn horizontal_wall_cost(&self, x: i32, y: i32) -> Cost;
}
