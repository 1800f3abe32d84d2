//! The [`NavGrid3`] type, a layered 3D navigation grid.
//!
//! Same handle semantics as [`NavGrid`](crate::NavGrid): clones share
//! storage and dimensions never change after construction.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cell::GridCell;
use crate::geom::Point3;

#[derive(Debug, Clone)]
struct GridBuffer3 {
    cells: Vec<GridCell>,
    width: usize,
    height: usize,
    depth: usize,
}

impl GridBuffer3 {
    #[inline]
    fn index(&self, p: Point3) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.z < 0 {
            return None;
        }
        let (x, y, z) = (p.x as usize, p.y as usize, p.z as usize);
        if x < self.width && y < self.height && z < self.depth {
            Some((z * self.height + y) * self.width + x)
        } else {
            None
        }
    }
}

/// A 3D grid of [`GridCell`]s backed by shared storage.
#[derive(Debug, Clone)]
pub struct NavGrid3 {
    buffer: Rc<RefCell<GridBuffer3>>,
    size: Point3,
}

impl NavGrid3 {
    /// Create a new grid with every cell at weight 0.
    pub fn new(width: i32, height: i32, depth: i32) -> Self {
        Self::filled(width, height, depth, GridCell::OPEN)
    }

    /// Create a cube grid with side `dim`.
    pub fn cube(dim: i32) -> Self {
        Self::new(dim, dim, dim)
    }

    /// Create a new grid with every cell set to `cell`.
    pub fn filled(width: i32, height: i32, depth: i32, cell: GridCell) -> Self {
        let size = Point3::new(width.max(0), height.max(0), depth.max(0));
        let (w, h, d) = (size.x as usize, size.y as usize, size.z as usize);
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer3 {
                cells: vec![cell; w * h * d],
                width: w,
                height: h,
                depth: d,
            })),
            size,
        }
    }

    /// Dimensions as a `Point3` (width, height, depth).
    #[inline]
    pub fn size(&self) -> Point3 {
        self.size
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.size.x as usize * self.size.y as usize * self.size.z as usize
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point3) -> bool {
        p.x >= 0
            && p.y >= 0
            && p.z >= 0
            && p.x < self.size.x
            && p.y < self.size.y
            && p.z < self.size.z
    }

    /// Whether both handles share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &NavGrid3) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    pub fn at(&self, p: Point3) -> Option<GridCell> {
        let buf = self.buffer.borrow();
        buf.index(p).map(|i| buf.cells[i])
    }

    /// Read the weight at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn weight(&self, p: Point3) -> Option<i32> {
        self.at(p).map(|c| c.weight)
    }

    /// Set the cell at `p`. Returns `false` if `p` is outside the grid.
    pub fn set(&self, p: Point3, cell: GridCell) -> bool {
        self.update(p, |c| *c = cell)
    }

    /// Set only the weight at `p`.
    pub fn set_weight(&self, p: Point3, weight: i32) -> bool {
        self.update(p, |c| c.weight = weight)
    }

    /// Set only the blocker distance at `p`.
    pub fn set_blocker_distance(&self, p: Point3, dist: u32) -> bool {
        self.update(p, |c| c.blocker_distance = dist)
    }

    fn update(&self, p: Point3, f: impl FnOnce(&mut GridCell)) -> bool {
        let mut buf = self.buffer.borrow_mut();
        match buf.index(p) {
            Some(i) => {
                f(&mut buf.cells[i]);
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&self, cell: GridCell) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            *c = cell;
        }
    }

    /// Every coordinate in the grid, x fastest, then y, then z.
    pub fn points(&self) -> impl Iterator<Item = Point3> + use<> {
        let Point3 { x: w, y: h, z: d } = self.size;
        (0..d).flat_map(move |z| (0..h).flat_map(move |y| (0..w).map(move |x| Point3::new(x, y, z))))
    }
}
