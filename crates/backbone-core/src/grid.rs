//! The [`NavGrid`] type, a 2D navigation grid of [`GridCell`]s.
//!
//! A `NavGrid` is a *handle* to a shared backing buffer. Cloning a `NavGrid`
//! yields another handle to the **same** storage, so game logic that marks a
//! cell blocked through one handle is seen by every pathfinder holding
//! another. Dimensions are fixed at construction.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::{BLOCKED_WEIGHT, GridCell};
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<GridCell>,
    width: usize,
    height: usize,
}

impl GridBuffer {
    fn new(width: usize, height: usize, cell: GridCell) -> Self {
        Self {
            cells: vec![cell; width * height],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// NavGrid
// ---------------------------------------------------------------------------

/// A 2D grid of [`GridCell`]s backed by shared storage.
#[derive(Debug, Clone)]
pub struct NavGrid {
    buffer: Rc<RefCell<GridBuffer>>,
    bounds: Range,
}

impl NavGrid {
    /// Create a new grid of the given dimensions with every cell at weight 0.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, GridCell::OPEN)
    }

    /// Create a new grid of the given dimensions with every cell set to `cell`.
    pub fn filled(width: i32, height: i32, cell: GridCell) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer::new(
                w as usize, h as usize, cell,
            ))),
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether both handles share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &NavGrid) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    pub fn at(&self, p: Point) -> Option<GridCell> {
        let buf = self.buffer.borrow();
        buf.index(p).map(|i| buf.cells[i])
    }

    /// Read the weight at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<i32> {
        self.at(p).map(|c| c.weight)
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is
    /// outside the grid.
    pub fn set(&self, p: Point, cell: GridCell) -> bool {
        self.update(p, |c| *c = cell)
    }

    /// Set only the weight at `p`, keeping the blocker distance.
    pub fn set_weight(&self, p: Point, weight: i32) -> bool {
        self.update(p, |c| c.weight = weight)
    }

    /// Set only the blocker distance at `p`, keeping the weight.
    pub fn set_blocker_distance(&self, p: Point, dist: u32) -> bool {
        self.update(p, |c| c.blocker_distance = dist)
    }

    fn update(&self, p: Point, f: impl FnOnce(&mut GridCell)) -> bool {
        let mut buf = self.buffer.borrow_mut();
        match buf.index(p) {
            Some(i) => {
                f(&mut buf.cells[i]);
                true
            }
            None => false,
        }
    }

    /// Fill every cell in the grid with `cell`.
    pub fn fill(&self, cell: GridCell) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            *c = cell;
        }
    }

    /// Apply `f` to every cell in the grid, replacing each with the return
    /// value.
    ///
    /// `f` may read the grid through any handle and sees the cells as they
    /// were before the call. New values are written once `f` has run on every
    /// cell.
    pub fn map_cells<F: FnMut(Point, GridCell) -> GridCell>(&self, mut f: F) {
        let updated: Vec<GridCell> = self.iter().map(|(p, c)| f(p, c)).collect();
        self.buffer.borrow_mut().cells = updated;
    }

    /// Row-major iterator over `(Point, GridCell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// Build a grid from an ASCII map, one line per row.
    ///
    /// `.` is weight 0, `1`–`9` are that weight and `#` is
    /// [`BLOCKED_WEIGHT`]. Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&str> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => return Err(GridError::Empty),
        };

        let width = lines[0].chars().count();
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(GridError::InconsistentSize(s.to_string()));
        }

        let grid = NavGrid::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let weight = match ch {
                    '.' => 0,
                    '#' => BLOCKED_WEIGHT,
                    '1'..='9' => ch as i32 - '0' as i32,
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                };
                grid.set_weight(pos, weight);
            }
        }
        Ok(grid)
    }
}

/// Renders the grid in the format accepted by [`NavGrid::parse`]. Weights
/// between 10 and [`BLOCKED_WEIGHT`] have no single-character form and are
/// drawn as `+`; negative weights are drawn as `-`. Neither parses back.
impl fmt::Display for NavGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let w = self.weight(Point::new(x, y)).unwrap_or_default();
                let ch = match w {
                    0 => '.',
                    1..=9 => char::from(b'0' + w as u8),
                    _ if w >= BLOCKED_WEIGHT => '#',
                    _ if w < 0 => '-',
                    _ => '+',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, GridCell)` pairs in a [`NavGrid`].
pub struct GridIter<'a> {
    grid: &'a NavGrid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, GridCell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.at(p).unwrap_or_default()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing an ASCII navigation grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no non-blank line.
    Empty,
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside `.`, `#` and `1`–`9` was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "navigation grid: empty map"),
            Self::InconsistentSize(s) => write!(f, "navigation grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "navigation grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = NavGrid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.at(Point::new(0, 0)), Some(GridCell::OPEN));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn negative_dimensions_give_empty_grid() {
        let g = NavGrid::new(-3, 2);
        assert!(g.is_empty());
        assert_eq!(g.at(Point::ZERO), None);
    }

    #[test]
    fn grid_set_and_get() {
        let g = NavGrid::new(4, 3);
        assert!(g.set(Point::new(2, 1), GridCell::new(5).with_blocker_distance(2)));
        assert_eq!(g.weight(Point::new(2, 1)), Some(5));
        assert!(g.set_weight(Point::new(2, 1), 9));
        assert_eq!(g.at(Point::new(2, 1)), Some(GridCell::new(9).with_blocker_distance(2)));
        assert!(!g.set(Point::new(10, 10), GridCell::BLOCKED));
    }

    #[test]
    fn clones_share_storage() {
        let g = NavGrid::new(3, 3);
        let h = g.clone();
        assert!(g.ptr_eq(&h));
        h.set(Point::new(1, 1), GridCell::BLOCKED);
        assert!(g.at(Point::new(1, 1)).is_some_and(GridCell::is_blocked));
        assert!(!g.ptr_eq(&NavGrid::new(3, 3)));
    }

    #[test]
    fn fill_and_map() {
        let g = NavGrid::new(3, 2);
        g.fill(GridCell::new(2));
        assert!(g.iter().all(|(_, c)| c.weight == 2));
        g.map_cells(|p, c| c.with_weight(c.weight + p.x));
        assert_eq!(g.weight(Point::new(2, 1)), Some(4));
        assert_eq!(g.iter().count(), 6);
    }

    #[test]
    fn parse_map() {
        let g = NavGrid::parse(
            "
.#3
9..
",
        )
        .unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.weight(Point::new(0, 0)), Some(0));
        assert_eq!(g.weight(Point::new(1, 0)), Some(BLOCKED_WEIGHT));
        assert_eq!(g.weight(Point::new(2, 0)), Some(3));
        assert_eq!(g.weight(Point::new(0, 1)), Some(9));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(NavGrid::parse("\n  \n").unwrap_err(), GridError::Empty);
        assert!(matches!(
            NavGrid::parse("...\n.."),
            Err(GridError::InconsistentSize(_))
        ));
        assert_eq!(
            NavGrid::parse("..\n.x").err(),
            Some(GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn display_matches_parse() {
        let src = ".#3\n9..\n";
        let g = NavGrid::parse(src).unwrap();
        assert_eq!(g.to_string(), src);
        g.set_weight(Point::new(0, 0), 42);
        assert!(g.to_string().starts_with('+'));
        g.set_weight(Point::new(0, 0), -3);
        assert!(g.to_string().starts_with('-'));
        assert!(NavGrid::parse(&g.to_string()).is_err());
    }

    #[test]
    fn map_cells_reads_through_shared_handle() {
        let g = NavGrid::parse("1234").unwrap();
        let view = g.clone();
        g.map_cells(|p, c| c.with_weight(view.weight(p.shift(-1, 0)).unwrap_or(0)));
        assert_eq!(g.to_string(), ".123\n");
    }
}
