//! Shared helpers for the navigation demos: maze generation and ASCII
//! rendering of grids with path overlays.

use backbone_core::{BLOCKED_WEIGHT, NavGrid, Point};
use rand::Rng;

pub const WIDTH: i32 = 32;
pub const HEIGHT: i32 = 16;

/// Fill a new grid with random terrain: each cell is blocked with
/// probability `blocked_pct`, otherwise it gets a weight in `0..10`.
///
/// `keep_clear` cells are always left at weight 0 so navigators have somewhere
/// to stand.
pub fn random_maze(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    blocked_pct: f64,
    keep_clear: &[Point],
) -> NavGrid {
    let grid = NavGrid::new(width, height);
    grid.map_cells(|p, cell| {
        let weight = if keep_clear.contains(&p) {
            0
        } else if rng.random_bool(blocked_pct) {
            BLOCKED_WEIGHT
        } else {
            rng.random_range(0..10)
        };
        cell.with_weight(weight)
    });
    grid
}

/// Render `grid` as ASCII, drawing each `(marker, path)` pair on top. Later
/// paths draw over earlier ones.
pub fn render(grid: &NavGrid, paths: &[(char, &[Point])]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    for (marker, path) in paths {
        for p in path.iter() {
            if let Some(ch) = rows
                .get_mut(p.y as usize)
                .and_then(|row| row.get_mut(p.x as usize))
            {
                *ch = *marker;
            }
        }
    }
    let mut out = String::with_capacity(grid.len() + rows.len());
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
