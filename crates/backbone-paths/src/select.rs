//! Cell selection strategies: which open cell the search resolves next.

use std::collections::{BTreeSet, HashMap};

use crate::traits::Coordinate;

/// Picks the next open cell to resolve.
pub trait CellSelector<C: Coordinate> {
    /// Return a member of `open`, or `None` if `open` is empty.
    ///
    /// `cost_from_start` holds an entry for every open cell.
    fn select(&self, open: &BTreeSet<C>, goal: C, cost_from_start: &HashMap<C, i64>) -> Option<C>;
}

/// Greedy nearest-to-goal selection.
///
/// Chooses the open cell with the smallest straight-line distance to the
/// goal, ignoring the cost already paid to reach it. Ties go to the smallest
/// coordinate. Paths are usually good but not always the cheapest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestFirst;

impl<C: Coordinate> CellSelector<C> for NearestFirst {
    fn select(&self, open: &BTreeSet<C>, goal: C, _cost: &HashMap<C, i64>) -> Option<C> {
        open.iter().copied().min_by_key(|c| c.squared_distance(goal))
    }
}

/// Lowest accumulated cost first, ties broken by distance to the goal.
///
/// With non-negative weights this is Dijkstra's order and the search returns
/// a minimum-cost path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheapestFirst;

impl<C: Coordinate> CellSelector<C> for CheapestFirst {
    fn select(&self, open: &BTreeSet<C>, goal: C, cost: &HashMap<C, i64>) -> Option<C> {
        open.iter().copied().min_by_key(|c| {
            (
                cost.get(c).copied().unwrap_or(i64::MAX),
                c.squared_distance(goal),
            )
        })
    }
}
