#![allow(dead_code)]

use dynamic_search::{run_search, Algorithm, Grid, NoopObserver, Position, SearchOptions, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;

/// Obstacle-free grid with both endpoints set.
pub fn open_grid(size: usize, start: Position, target: Position) -> Grid {
    let mut grid = Grid::new(size).expect("non-empty grid");
    grid.set_start(start).expect("start in bounds");
    grid.set_target(target).expect("target in bounds");
    grid
}

/// Grid with `walls` seeded random obstacles between the corners.
pub fn walled_grid(size: usize, walls: usize, seed: u64) -> Grid {
    let mut grid = open_grid(size, Position::new(0, 0), Position::new(size - 1, size - 1));
    let mut rng = StdRng::seed_from_u64(seed);
    grid.scatter_walls(walls, &mut rng);
    grid
}

/// No pacing, no dynamic obstacles.
pub fn quiet() -> SearchOptions {
    SearchOptions::default().instant().without_obstacles()
}

pub fn run(algorithm: Algorithm, grid: &mut Grid, options: &SearchOptions) -> SearchResult {
    run_search(algorithm, grid, &mut NoopObserver, options).expect("preconditions hold")
}

/// Checks the path runs start to target through adjacent, distinct cells.
/// Interior passability is only checked when `static_grid` is set, since the
/// injector may block a cell after the search passed through it.
pub fn assert_valid_path(grid: &Grid, result: &SearchResult, static_grid: bool) {
    let path = &result.path;
    assert!(result.found(), "{} did not find a path", result.strategy);
    assert_eq!(path.first().copied(), grid.start(), "{} path start", result.strategy);
    assert_eq!(path.last().copied(), grid.target(), "{} path end", result.strategy);

    let unique: FxHashSet<Position> = path.iter().copied().collect();
    assert_eq!(unique.len(), path.len(), "{} path repeats a cell: {:?}", result.strategy, path);

    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} path jumps from {} to {}",
            result.strategy,
            pair[0],
            pair[1]
        );
    }

    if static_grid {
        for pos in &path[1..path.len() - 1] {
            assert!(grid.is_passable(*pos), "{} path crosses obstacle {}", result.strategy, pos);
        }
    }
}
