//! Two navigators on a random weighted maze, each pathing to the other's
//! position in a single batch.
//!
//! Run: cargo run --bin navigation [seed]

use backbone_core::Point;
use backbone_demos::{HEIGHT, WIDTH, random_maze, render};
use backbone_paths::{CoordinateConverter, PathRequest, Pathfinder, path_cost};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    let first = Point::new(0, 0);
    let second = Point::new(WIDTH - 1, HEIGHT - 1);
    let grid = random_maze(&mut rng, WIDTH, HEIGHT, 0.2, &[first, second]);
    log::info!("maze {WIDTH}x{HEIGHT} from seed {seed}");

    let pathfinder = Pathfinder::with_grid(grid.clone());
    let requests = [
        PathRequest::new(first, second),
        PathRequest::new(second, first),
    ];
    let paths = match pathfinder.find_paths(&requests) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", render(&grid, &[('a', &paths[0]), ('b', &paths[1])]));

    let converter = CoordinateConverter::default();
    for (request, path) in requests.iter().zip(&paths) {
        if path.is_empty() {
            println!("{} -> {}: no path", request.start, request.end);
            continue;
        }
        let cost = path_cost(&grid, request.start, path).unwrap_or_default();
        let window = converter.path_to_window(path);
        println!(
            "{} -> {}: {} steps, cost {cost}, first waypoint at {:?}",
            request.start,
            request.end,
            path.len(),
            window[0]
        );
    }
}
