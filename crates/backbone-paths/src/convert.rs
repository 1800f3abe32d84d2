//! Conversion between grid cells and window coordinates.

use backbone_core::Point;
use glam::Vec2;

/// Maps grid cells to window space and back.
///
/// A cell covers `[x * w, (x + 1) * w)` on each axis, shifted by the origin
/// offset. The right and bottom edges belong to the next cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateConverter {
    cell_width: f32,
    origin_offset: Vec2,
}

impl Default for CoordinateConverter {
    /// 50-unit cells with the grid origin at the window origin.
    fn default() -> Self {
        Self {
            cell_width: 50.0,
            origin_offset: Vec2::ZERO,
        }
    }
}

impl CoordinateConverter {
    /// `cell_width` must be positive.
    pub fn new(cell_width: f32, origin_offset: Vec2) -> Self {
        debug_assert!(cell_width > 0.0, "cell width must be positive, got {cell_width}");
        Self {
            cell_width,
            origin_offset,
        }
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn origin_offset(&self) -> Vec2 {
        self.origin_offset
    }

    /// `width` must be positive.
    pub fn set_cell_width(&mut self, width: f32) {
        debug_assert!(width > 0.0, "cell width must be positive, got {width}");
        self.cell_width = width;
    }

    pub fn set_origin_offset(&mut self, offset: Vec2) {
        self.origin_offset = offset;
    }

    /// Window position of the center of cell `p`.
    pub fn to_window(&self, p: Point) -> Vec2 {
        let top_left = Vec2::new(p.x as f32, p.y as f32) * self.cell_width;
        top_left + Vec2::splat(self.cell_width / 2.0) + self.origin_offset
    }

    /// The cell containing window position `v`.
    pub fn to_grid(&self, v: Vec2) -> Point {
        let cell = ((v - self.origin_offset) / self.cell_width).floor();
        Point::new(cell.x as i32, cell.y as i32)
    }

    pub fn path_to_window(&self, path: &[Point]) -> Vec<Vec2> {
        path.iter().map(|&p| self.to_window(p)).collect()
    }

    pub fn path_to_grid(&self, path: &[Vec2]) -> Vec<Point> {
        path.iter().map(|&v| self.to_grid(v)).collect()
    }
}
