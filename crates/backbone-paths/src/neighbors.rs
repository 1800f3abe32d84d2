//! Neighbor enumeration for the navigation grids.
//!
//! 2D grids are 4-connected, 3D grids 26-connected. Cells outside the grid
//! are never produced.

use backbone_core::{BLOCKED_WEIGHT, NavGrid, NavGrid3, Point, Point3};

use crate::traits::NavGraph;

impl NavGraph for NavGrid {
    type Coord = Point;

    #[inline]
    fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn weight_at(&self, p: Point) -> i32 {
        self.weight(p).unwrap_or(BLOCKED_WEIGHT)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        buf.extend(p.neighbors_4().into_iter().filter(|&n| bounds.contains(n)));
    }
}

impl NavGraph for NavGrid3 {
    type Coord = Point3;

    #[inline]
    fn contains(&self, p: Point3) -> bool {
        NavGrid3::contains(self, p)
    }

    #[inline]
    fn weight_at(&self, p: Point3) -> i32 {
        self.weight(p).unwrap_or(BLOCKED_WEIGHT)
    }

    fn neighbors(&self, p: Point3, buf: &mut Vec<Point3>) {
        buf.extend(
            p.neighbors_26()
                .into_iter()
                .filter(|&n| NavGrid3::contains(self, n)),
        );
    }
}
