//! Compares the two cell selection strategies on a fixed maze with a heavy
//! shortcut, then prints the blocker-distance field.
//!
//! Run: cargo run --bin maze

use backbone_core::{BLOCKED_WEIGHT, NavGrid, Point};
use backbone_demos::render;
use backbone_paths::{
    CheapestFirst, PathRequest, Pathfinder, path_cost, update_blocker_distances,
};

const MAZE: &str = "
..........#.........
.########.#.#######.
.#......#.#.#.....#.
.#.####.#...#.###.#.
.#.#..#.#####.#...#.
...#..#.99999.#.#...
####..#.......#.#.##
......#########.#...
.##################.
....................
";

fn main() {
    env_logger::init();

    let grid = match NavGrid::parse(MAZE) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let request = PathRequest::new(Point::new(0, 0), Point::new(19, 5));
    let nearest = Pathfinder::with_grid(grid.clone());
    let cheapest = Pathfinder::with_grid(grid.clone()).with_selector(CheapestFirst);

    for (name, result) in [
        ("nearest-first", nearest.find_path(&request)),
        ("cheapest-first", cheapest.find_path(&request)),
    ] {
        match result {
            Ok(path) => {
                let cost = path_cost(&grid, request.start, &path).unwrap_or_default();
                println!("{name}: {} steps, cost {cost}", path.len());
                print!("{}", render(&grid, &[('*', &path)]));
                println!();
            }
            Err(e) => eprintln!("{name}: {e}"),
        }
    }

    let blocked = update_blocker_distances(&grid, BLOCKED_WEIGHT);
    println!("blocker distances ({blocked} blocked cells):");
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| match grid.at(Point::new(x, y)) {
                Some(c) if c.blocker_distance == 0 => '#',
                Some(c) => char::from_digit(c.blocker_distance.min(9), 10).unwrap_or('?'),
                None => ' ',
            })
            .collect();
        println!("{row}");
    }
}
