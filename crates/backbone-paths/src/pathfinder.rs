//! Batched path search over a shared navigation grid.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::config::PathfinderConfig;
use crate::distance::transition_cost;
use crate::error::PathError;
use crate::request::{Path, PathRequest};
use crate::select::{CellSelector, NearestFirst};
use crate::traits::NavGraph;

/// Resolves batches of [`PathRequest`]s against one navigation grid.
///
/// The pathfinder holds a *handle* to the grid (grids share storage between
/// clones), so cells blocked by game logic after
/// [`set_navigation_grid`](Self::set_navigation_grid) are honoured by later
/// searches. No search state outlives a single request.
///
/// The cell selection strategy defaults to [`NearestFirst`].
#[derive(Debug, Clone)]
pub struct Pathfinder<G, S = NearestFirst> {
    grid: Option<G>,
    selector: S,
    config: PathfinderConfig,
}

impl<G: NavGraph> Pathfinder<G> {
    /// Create a pathfinder with no grid bound.
    pub fn new() -> Self {
        Self {
            grid: None,
            selector: NearestFirst,
            config: PathfinderConfig::default(),
        }
    }

    /// Create a pathfinder bound to `grid`.
    pub fn with_grid(grid: G) -> Self {
        Self {
            grid: Some(grid),
            ..Self::new()
        }
    }
}

impl<G: NavGraph> Default for Pathfinder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: NavGraph, S: CellSelector<G::Coord>> Pathfinder<G, S> {
    /// Replace the cell selection strategy (builder).
    pub fn with_selector<T: CellSelector<G::Coord>>(self, selector: T) -> Pathfinder<G, T> {
        Pathfinder {
            grid: self.grid,
            selector,
            config: self.config,
        }
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: PathfinderConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// The active cell selection strategy.
    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Bind a grid, or unbind with `None`. While unbound every request
    /// yields an empty path.
    pub fn set_navigation_grid(&mut self, grid: Option<G>) {
        self.grid = grid;
    }

    /// The bound grid, if any.
    #[inline]
    pub fn navigation_grid(&self) -> Option<&G> {
        self.grid.as_ref()
    }

    /// Compute one path per request, in request order.
    ///
    /// Every request is checked against the grid bounds before any search
    /// runs; the first out-of-bounds coordinate fails the whole batch.
    pub fn find_paths(
        &self,
        requests: &[PathRequest<G::Coord>],
    ) -> Result<Vec<Path<G::Coord>>, PathError<G::Coord>> {
        let Some(grid) = &self.grid else {
            log::warn!(
                "no navigation grid bound; returning {} empty paths",
                requests.len()
            );
            return Ok(vec![Path::new(); requests.len()]);
        };

        for (index, request) in requests.iter().enumerate() {
            check_bounds(grid, index, request)?;
        }

        let paths: Vec<_> = requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                log::trace!("path request {index}: {} -> {}", request.start, request.end);
                self.search(grid, request.start, request.end)
            })
            .collect();

        log::debug!(
            "resolved {} path requests, {} without a path",
            paths.len(),
            paths.iter().filter(|p| p.is_empty()).count()
        );
        Ok(paths)
    }

    /// Compute the path for a single request.
    pub fn find_path(
        &self,
        request: &PathRequest<G::Coord>,
    ) -> Result<Path<G::Coord>, PathError<G::Coord>> {
        let Some(grid) = &self.grid else {
            log::warn!("no navigation grid bound; returning an empty path");
            return Ok(Path::new());
        };
        check_bounds(grid, 0, request)?;
        Ok(self.search(grid, request.start, request.end))
    }

    fn search(&self, grid: &G, start: G::Coord, end: G::Coord) -> Path<G::Coord> {
        if start == end {
            return Path::new();
        }
        let blocked_weight = self.config.blocked_weight;

        let mut open = BTreeSet::from([start]);
        let mut closed = HashSet::new();
        let mut cost_from_start = HashMap::from([(start, 0i64)]);
        let mut came_from = HashMap::new();
        let mut nbuf = Vec::with_capacity(26);

        while let Some(current) = self.selector.select(&open, end, &cost_from_start) {
            if current == end {
                return reconstruct_path(end, &came_from);
            }
            if !open.remove(&current) {
                log::error!("cell selector returned {current}, which is not open");
                break;
            }
            closed.insert(current);

            let current_weight = grid.weight_at(current);
            let current_cost = cost_from_start[&current];

            nbuf.clear();
            grid.neighbors(current, &mut nbuf);

            for &neighbor in nbuf.iter() {
                if closed.contains(&neighbor) {
                    continue;
                }
                let neighbor_weight = grid.weight_at(neighbor);
                if neighbor_weight >= blocked_weight {
                    closed.insert(neighbor);
                    continue;
                }
                let tentative = current_cost + transition_cost(current_weight, neighbor_weight);

                if open.contains(&neighbor) {
                    if tentative >= cost_from_start[&neighbor] {
                        continue;
                    }
                } else {
                    open.insert(neighbor);
                }
                cost_from_start.insert(neighbor, tentative);
                came_from.insert(neighbor, current);
            }
        }

        log::debug!("no path from {start} to {end}");
        Path::new()
    }
}

fn check_bounds<G: NavGraph>(
    grid: &G,
    index: usize,
    request: &PathRequest<G::Coord>,
) -> Result<(), PathError<G::Coord>> {
    for coord in [request.start, request.end] {
        if !grid.contains(coord) {
            return Err(PathError::OutOfBounds { index, coord });
        }
    }
    Ok(())
}

/// Walk predecessors back from `end`. The start cell has no predecessor and
/// is left out.
fn reconstruct_path<C: crate::Coordinate>(end: C, came_from: &HashMap<C, C>) -> Path<C> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    // The last pushed cell is the start.
    path.pop();
    path.reverse();
    path
}

/// Total transition cost of walking `path` from `start`, as the search
/// accounts it. Returns `None` if any cell lies outside the grid.
pub fn path_cost<G: NavGraph>(grid: &G, start: G::Coord, path: &[G::Coord]) -> Option<i64> {
    if !grid.contains(start) {
        return None;
    }
    let mut total = 0;
    let mut prev = start;
    for &c in path {
        if !grid.contains(c) {
            return None;
        }
        total += transition_cost(grid.weight_at(prev), grid.weight_at(c));
        prev = c;
    }
    Some(total)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::select::CheapestFirst;
    use crate::traits::Coordinate;
    use backbone_core::{BLOCKED_WEIGHT, NavGrid, NavGrid3, Point, Point3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const W: i32 = 12;
    const H: i32 = 10;

    fn random_grid(rng: &mut StdRng) -> NavGrid {
        let grid = NavGrid::new(W, H);
        for p in grid.bounds() {
            let weight = if rng.random_bool(0.25) {
                BLOCKED_WEIGHT
            } else {
                rng.random_range(0..10)
            };
            grid.set_weight(p, weight);
        }
        grid
    }

    fn random_requests(rng: &mut StdRng, n: usize) -> Vec<PathRequest<Point>> {
        (0..n)
            .map(|_| {
                let start = Point::new(rng.random_range(0..W), rng.random_range(0..H));
                let end = Point::new(rng.random_range(0..W), rng.random_range(0..H));
                PathRequest::new(start, end)
            })
            .collect()
    }

    fn assert_valid<G: NavGraph>(grid: &G, request: &PathRequest<G::Coord>, path: &[G::Coord]) {
        if path.is_empty() {
            return;
        }
        assert_eq!(path.last(), Some(&request.end));
        assert!(!path.contains(&request.start));
        let mut prev = request.start;
        for &c in path {
            assert!(prev.is_adjacent(c), "{prev} -> {c} is not a single step");
            assert!(grid.weight_at(c) < BLOCKED_WEIGHT, "{c} is blocked");
            prev = c;
        }
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn random_grids_produce_valid_deterministic_paths() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let grid = random_grid(&mut rng);
            let requests = random_requests(&mut rng, 12);
            let pf = Pathfinder::with_grid(grid.clone());

            let first = pf.find_paths(&requests).unwrap();
            let second = pf.find_paths(&requests).unwrap();
            assert_eq!(first, second);

            for (request, path) in requests.iter().zip(&first) {
                assert_valid(&grid, request, path);
                assert_eq!(&pf.find_path(request).unwrap(), path);
            }
        }
    }

    #[test]
    fn batch_order_does_not_matter() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_grid(&mut rng);
        let requests = random_requests(&mut rng, 16);
        let pf = Pathfinder::with_grid(grid);

        let forward = pf.find_paths(&requests).unwrap();
        let reversed: Vec<_> = requests.iter().rev().copied().collect();
        let mut backward = pf.find_paths(&reversed).unwrap();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn cheapest_first_never_costs_more() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            let grid = random_grid(&mut rng);
            let requests = random_requests(&mut rng, 10);
            let nearest = Pathfinder::with_grid(grid.clone());
            let cheapest = Pathfinder::with_grid(grid.clone()).with_selector(CheapestFirst);

            let a = nearest.find_paths(&requests).unwrap();
            let b = cheapest.find_paths(&requests).unwrap();
            for ((request, pa), pb) in requests.iter().zip(&a).zip(&b) {
                assert_valid(&grid, request, pb);
                // Both strategies exhaust the start's component before giving up.
                assert_eq!(pa.is_empty(), pb.is_empty());
                let ca = path_cost(&grid, request.start, pa).unwrap();
                let cb = path_cost(&grid, request.start, pb).unwrap();
                assert!(cb <= ca, "cheapest {cb} > nearest {ca}");
            }
        }
    }

    fn random_grid3(rng: &mut StdRng, side: i32) -> NavGrid3 {
        let grid = NavGrid3::cube(side);
        for c in grid.points() {
            let weight = if rng.random_bool(0.3) {
                BLOCKED_WEIGHT
            } else {
                rng.random_range(0..10)
            };
            grid.set_weight(c, weight);
        }
        grid
    }

    #[test]
    fn random_cubes_produce_valid_deterministic_paths() {
        let mut rng = StdRng::seed_from_u64(99);
        let side = 5;
        for _ in 0..10 {
            let grid = random_grid3(&mut rng, side);
            let requests: Vec<_> = (0..8)
                .map(|_| {
                    let mut coord = || {
                        Point3::new(
                            rng.random_range(0..side),
                            rng.random_range(0..side),
                            rng.random_range(0..side),
                        )
                    };
                    PathRequest::new(coord(), coord())
                })
                .collect();
            let pf = Pathfinder::with_grid(grid.clone());

            let first = pf.find_paths(&requests).unwrap();
            assert_eq!(first, pf.find_paths(&requests).unwrap());
            for (request, path) in requests.iter().zip(&first) {
                assert_valid(&grid, request, path);
            }
        }
    }
}
