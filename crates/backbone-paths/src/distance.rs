use backbone_core::{Point, Point3};

use crate::traits::Coordinate;

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    dx * dx + dy * dy
}

/// Squared Euclidean distance between two 3D points.
#[inline]
pub fn squared_euclidean_3d(a: Point3, b: Point3) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    let dz = (a.z - b.z) as i64;
    dx * dx + dy * dy + dz * dz
}

/// Cost of stepping between two cells: the mean of their weights, rounded
/// toward zero.
#[inline]
pub fn transition_cost(from_weight: i32, to_weight: i32) -> i64 {
    (from_weight as i64 + to_weight as i64) / 2
}

impl Coordinate for Point {
    #[inline]
    fn squared_distance(self, other: Self) -> i64 {
        squared_euclidean(self, other)
    }

    /// Cardinal adjacency: one unit along exactly one axis.
    #[inline]
    fn is_adjacent(self, other: Self) -> bool {
        squared_euclidean(self, other) == 1
    }
}

impl Coordinate for Point3 {
    #[inline]
    fn squared_distance(self, other: Self) -> i64 {
        squared_euclidean_3d(self, other)
    }

    /// 26-neighborhood adjacency.
    #[inline]
    fn is_adjacent(self, other: Self) -> bool {
        let d = other - self;
        self != other && d.x.abs() <= 1 && d.y.abs() <= 1 && d.z.abs() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(squared_euclidean(Point::new(0, 0), Point::new(3, 4)), 25);
        assert_eq!(
            squared_euclidean_3d(Point3::new(1, 1, 1), Point3::new(2, 3, 4)),
            14
        );
    }

    #[test]
    fn transition_cost_rounds_toward_zero() {
        assert_eq!(transition_cost(0, 9), 4);
        assert_eq!(transition_cost(3, 3), 3);
        assert_eq!(transition_cost(-3, 0), -1);
    }

    #[test]
    fn adjacency() {
        let p = Point::new(2, 2);
        assert!(p.is_adjacent(Point::new(2, 3)));
        assert!(!p.is_adjacent(Point::new(3, 3)));
        assert!(!p.is_adjacent(p));

        let q = Point3::new(1, 1, 1);
        assert!(q.is_adjacent(Point3::new(2, 2, 2)));
        assert!(q.is_adjacent(Point3::new(1, 1, 0)));
        assert!(!q.is_adjacent(q));
        assert!(!q.is_adjacent(Point3::new(3, 1, 1)));
    }
}
