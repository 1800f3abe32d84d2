//! Distance-to-nearest-blocker field.
//!
//! Fills every cell's `blocker_distance` with the number of neighbor steps
//! to the closest blocked cell, using a multi-source breadth-first search
//! seeded from all blocked cells at once.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use backbone_core::{NavGrid, NavGrid3, Point, Point3};

use crate::traits::NavGraph;

/// Distance stored when no blocked cell can be reached.
pub const NO_BLOCKER: u32 = u32::MAX;

/// A navigation graph whose cells can record their blocker distance.
pub trait BlockerField: NavGraph {
    /// Every coordinate of the graph.
    fn coords(&self) -> Vec<Self::Coord>;

    /// Store `dist` as the blocker distance of `c`.
    fn set_blocker_distance_at(&self, c: Self::Coord, dist: u32);
}

impl BlockerField for NavGrid {
    fn coords(&self) -> Vec<Point> {
        self.bounds().iter().collect()
    }

    fn set_blocker_distance_at(&self, c: Point, dist: u32) {
        self.set_blocker_distance(c, dist);
    }
}

impl BlockerField for NavGrid3 {
    fn coords(&self) -> Vec<Point3> {
        self.points().collect()
    }

    fn set_blocker_distance_at(&self, c: Point3, dist: u32) {
        self.set_blocker_distance(c, dist);
    }
}

/// Recompute the blocker distance of every cell. Cells with weight at or
/// above `blocked_weight` are distance 0; cells that cannot reach any of
/// them get [`NO_BLOCKER`]. Returns the number of blocked cells.
pub fn update_blocker_distances<G: BlockerField>(grid: &G, blocked_weight: i32) -> usize {
    let coords = grid.coords();
    let mut dist: HashMap<G::Coord, u32> = HashMap::with_capacity(coords.len());
    let mut queue = VecDeque::new();

    for &c in &coords {
        if grid.weight_at(c) >= blocked_weight {
            dist.insert(c, 0);
            queue.push_back(c);
        }
    }
    let blocked = queue.len();

    let mut nbuf = Vec::new();
    while let Some(c) = queue.pop_front() {
        let next = dist[&c] + 1;
        nbuf.clear();
        grid.neighbors(c, &mut nbuf);
        for &n in nbuf.iter() {
            if let Entry::Vacant(e) = dist.entry(n) {
                e.insert(next);
                queue.push_back(n);
            }
        }
    }

    for c in coords {
        grid.set_blocker_distance_at(c, dist.get(&c).copied().unwrap_or(NO_BLOCKER));
    }
    log::debug!("blocker distances updated from {blocked} blocked cells");
    blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use backbone_core::{BLOCKED_WEIGHT, GridCell};

    fn dist(grid: &NavGrid, x: i32, y: i32) -> u32 {
        grid.at(Point::new(x, y)).map(|c| c.blocker_distance).unwrap()
    }

    #[test]
    fn center_blocker_in_small_grid() {
        let grid = NavGrid::parse("...\n.#.\n...").unwrap();
        assert_eq!(update_blocker_distances(&grid, BLOCKED_WEIGHT), 1);
        assert_eq!(dist(&grid, 1, 1), 0);
        assert_eq!(dist(&grid, 1, 0), 1);
        assert_eq!(dist(&grid, 2, 1), 1);
        assert_eq!(dist(&grid, 0, 0), 2);
        assert_eq!(dist(&grid, 2, 2), 2);
    }

    #[test]
    fn nearest_of_several_blockers_wins() {
        let grid = NavGrid::parse("#....#").unwrap();
        assert_eq!(update_blocker_distances(&grid, BLOCKED_WEIGHT), 2);
        let row: Vec<u32> = (0..6).map(|x| dist(&grid, x, 0)).collect();
        assert_eq!(row, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn no_blockers_leaves_sentinel() {
        let grid = NavGrid::new(2, 2);
        assert_eq!(update_blocker_distances(&grid, BLOCKED_WEIGHT), 0);
        assert!(grid.iter().all(|(_, c)| c.blocker_distance == NO_BLOCKER));
    }

    #[test]
    fn weights_are_untouched() {
        let grid = NavGrid::parse("3#7").unwrap();
        update_blocker_distances(&grid, BLOCKED_WEIGHT);
        assert_eq!(grid.at(Point::new(0, 0)), Some(GridCell::new(3).with_blocker_distance(1)));
        assert_eq!(grid.weight(Point::new(2, 0)), Some(7));
    }

    #[test]
    fn cube_uses_diagonal_steps() {
        let grid = NavGrid3::cube(3);
        grid.set(Point3::ZERO, GridCell::BLOCKED);
        update_blocker_distances(&grid, BLOCKED_WEIGHT);
        assert_eq!(grid.at(Point3::new(1, 1, 1)).map(|c| c.blocker_distance), Some(1));
        assert_eq!(grid.at(Point3::new(2, 2, 2)).map(|c| c.blocker_distance), Some(2));
    }
}
