use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A grid coordinate usable as a search key.
///
/// The total order breaks ties between equally good open cells, so two
/// searches over the same grid always visit cells in the same order.
pub trait Coordinate: Copy + Eq + Ord + Hash + Debug + Display {
    /// Squared straight-line distance to `other`.
    fn squared_distance(self, other: Self) -> i64;

    /// Whether `other` is one step away (any axis combination).
    fn is_adjacent(self, other: Self) -> bool;
}

/// A weighted navigation graph: neighbor enumeration plus per-cell weights.
pub trait NavGraph {
    type Coord: Coordinate;

    /// Whether `c` is a cell of the graph.
    fn contains(&self, c: Self::Coord) -> bool;

    /// Weight of the cell at `c`. Only called for coordinates inside the
    /// graph; implementations report cells outside it as blocked.
    fn weight_at(&self, c: Self::Coord) -> i32;

    /// Append the in-bounds neighbors of `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Self::Coord, buf: &mut Vec<Self::Coord>);
}
