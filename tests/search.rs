mod common;

use common::{assert_valid_path, open_grid, quiet, run};
use dynamic_search::{
    run_search, Algorithm, CancelAfter, FnObserver, Grid, Mark, Position, SearchOptions,
    SearchOutcome, SearchState, StepEvent,
};

fn record_events(algorithm: Algorithm, grid: &mut Grid, options: &SearchOptions) -> Vec<StepEvent> {
    let mut events = Vec::new();
    let mut observer = FnObserver::new(|_: &Grid, _: &SearchState, event: StepEvent| {
        events.push(event)
    });
    run_search(algorithm, grid, &mut observer, options).expect("preconditions hold");
    events
}

fn expanded(events: &[StepEvent]) -> Vec<Position> {
    events
        .iter()
        .filter_map(|event| match event {
            StepEvent::Expanded(pos) => Some(*pos),
            StepEvent::PathMarked(_) => None,
        })
        .collect()
}

#[test]
fn bfs_crosses_empty_grid_diagonally() {
    let mut grid = open_grid(10, Position::new(0, 0), Position::new(9, 9));
    let result = run(Algorithm::Bfs, &mut grid, &quiet());

    assert_eq!(result.outcome, SearchOutcome::Found);
    assert_eq!(result.steps(), 9);
    assert_valid_path(&grid, &result, true);
}

#[test]
fn bfs_and_ucs_match_chebyshev_distance_without_obstacles() {
    let pairs = [
        (Position::new(0, 0), Position::new(11, 11)),
        (Position::new(3, 7), Position::new(10, 1)),
        (Position::new(5, 5), Position::new(5, 0)),
        (Position::new(11, 0), Position::new(0, 4)),
    ];
    for (start, target) in pairs {
        let mut grid = open_grid(12, start, target);
        let bfs = run(Algorithm::Bfs, &mut grid, &quiet());
        let ucs = run(Algorithm::Ucs, &mut grid, &quiet());

        assert_eq!(bfs.steps(), start.chebyshev(&target));
        assert_eq!(ucs.steps(), bfs.steps());
        assert_valid_path(&grid, &bfs, true);
        assert_valid_path(&grid, &ucs, true);
    }
}

#[test]
fn every_strategy_takes_the_single_diagonal_step() {
    let start = Position::new(4, 4);
    let target = Position::new(5, 5);
    // A one-move budget keeps depth-limited search from wandering off first.
    let options = SearchOptions {
        depth_limit: 1,
        ..quiet()
    };

    for algorithm in Algorithm::ALL {
        let mut grid = open_grid(10, start, target);
        grid.place_obstacle(Position::new(4, 5)).unwrap();
        let result = run(algorithm, &mut grid, &options);

        assert!(result.found(), "{algorithm} failed");
        assert_eq!(result.path, vec![start, target], "{algorithm}");
    }
}

#[test]
fn enclosed_target_is_unreachable_for_every_strategy() {
    let target = Position::new(5, 5);
    for algorithm in Algorithm::ALL {
        let mut grid = open_grid(8, Position::new(0, 0), target);
        for dr in 4..=6 {
            for dc in 4..=6 {
                let pos = Position::new(dr, dc);
                if pos != target {
                    grid.place_obstacle(pos).unwrap();
                }
            }
        }

        let result = run(algorithm, &mut grid, &quiet());
        assert_eq!(result.outcome, SearchOutcome::Exhausted, "{algorithm}");
        assert!(result.path.is_empty());
    }
}

#[test]
fn depth_limit_zero_never_finds() {
    let mut grid = open_grid(4, Position::new(1, 1), Position::new(1, 2));
    let options = SearchOptions {
        depth_limit: 0,
        ..quiet()
    };
    let result = run(Algorithm::Dls, &mut grid, &options);

    assert_eq!(result.outcome, SearchOutcome::Exhausted);
    assert_eq!(result.stats.expansions, 0);
}

#[test]
fn depth_limit_bounds_path_length() {
    let start = Position::new(0, 0);
    let target = Position::new(0, 6);
    let mut grid = open_grid(8, start, target);

    let short = SearchOptions {
        depth_limit: 5,
        ..quiet()
    };
    assert_eq!(run(Algorithm::Dls, &mut grid, &short).outcome, SearchOutcome::Exhausted);

    let enough = SearchOptions {
        depth_limit: 12,
        ..quiet()
    };
    let result = run(Algorithm::Dls, &mut grid, &enough);
    assert_valid_path(&grid, &result, true);
    assert!(result.steps() <= 12);
}

#[test]
fn iterative_deepening_reports_success_depth() {
    let mut grid = open_grid(8, Position::new(0, 0), Position::new(0, 3));
    let result = run(Algorithm::Iddfs, &mut grid, &quiet());

    assert_valid_path(&grid, &result, true);
    let depth = result.stats.depth.expect("depth recorded");
    assert!(result.steps() <= depth);
}

#[test]
fn iterative_deepening_gives_up_after_max_depth() {
    let mut grid = open_grid(10, Position::new(0, 0), Position::new(9, 9));
    let options = SearchOptions {
        max_depth: 4,
        ..quiet()
    };
    let result = run(Algorithm::Iddfs, &mut grid, &options);

    assert_eq!(result.outcome, SearchOutcome::Exhausted);
    assert_eq!(result.stats.depth, None);
}

#[test]
fn cancellation_after_first_iteration_stops_every_strategy() {
    for algorithm in Algorithm::ALL {
        let mut grid = open_grid(10, Position::new(0, 0), Position::new(9, 9));
        let mut observer = CancelAfter::new(1);
        let result = run_search(algorithm, &mut grid, &mut observer, &quiet()).unwrap();

        assert_eq!(result.outcome, SearchOutcome::Cancelled, "{algorithm}");
        assert!(!result.found());
        assert!(result.path.is_empty());
        let beyond_start = result.stats.expansions.saturating_sub(1);
        assert!(beyond_start <= 1, "{algorithm} expanded {}", result.stats.expansions);
    }
}

#[test]
fn immediate_cancellation_expands_nothing() {
    for algorithm in Algorithm::ALL {
        let mut grid = open_grid(6, Position::new(0, 0), Position::new(5, 5));
        let mut observer = CancelAfter::new(0);
        let result = run_search(algorithm, &mut grid, &mut observer, &quiet()).unwrap();

        assert_eq!(result.outcome, SearchOutcome::Cancelled, "{algorithm}");
        assert_eq!(result.stats.expansions, 0, "{algorithm}");
    }
}

#[test]
fn bfs_expands_in_neighbor_order() {
    let mut grid = open_grid(3, Position::new(1, 1), Position::new(2, 2));
    let events = record_events(Algorithm::Bfs, &mut grid, &quiet());
    assert_eq!(
        expanded(&events),
        vec![
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(1, 2),
            Position::new(2, 1),
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(0, 0),
        ]
    );
}

#[test]
fn ucs_breaks_cost_ties_in_insertion_order() {
    let mut bfs_grid = open_grid(3, Position::new(1, 1), Position::new(2, 2));
    let mut ucs_grid = bfs_grid.clone();
    let bfs_events = record_events(Algorithm::Bfs, &mut bfs_grid, &quiet());
    let ucs_events = record_events(Algorithm::Ucs, &mut ucs_grid, &quiet());
    assert_eq!(expanded(&ucs_events), expanded(&bfs_events));
}

#[test]
fn dfs_explores_last_listed_neighbor_first() {
    let mut grid = open_grid(3, Position::new(1, 1), Position::new(0, 0));
    let events = record_events(Algorithm::Dfs, &mut grid, &quiet());

    assert_eq!(
        expanded(&events),
        vec![Position::new(1, 1), Position::new(2, 2)]
    );
}

#[test]
fn bidirectional_alternates_directions() {
    let mut grid = open_grid(5, Position::new(0, 0), Position::new(4, 4));
    let events = record_events(Algorithm::Bidirectional, &mut grid, &quiet());

    assert_eq!(
        expanded(&events)[..4],
        [
            Position::new(0, 0),
            Position::new(4, 4),
            Position::new(0, 1),
            Position::new(3, 4),
        ]
    );
}

#[test]
fn path_replay_follows_exploration() {
    let mut grid = open_grid(6, Position::new(0, 0), Position::new(4, 5));
    let mut events = Vec::new();
    let mut observer = FnObserver::new(|_: &Grid, state: &SearchState, event: StepEvent| {
        assert_eq!(state.mark(Position::new(0, 0)), Mark::Unvisited);
        assert_eq!(state.mark(Position::new(4, 5)), Mark::Unvisited);
        events.push(event);
    });
    let result = run_search(Algorithm::Bfs, &mut grid, &mut observer, &quiet()).unwrap();

    let first_path = events
        .iter()
        .position(|event| matches!(event, StepEvent::PathMarked(_)))
        .expect("path replayed");
    assert!(events[first_path..]
        .iter()
        .all(|event| matches!(event, StepEvent::PathMarked(_))));
    assert_eq!(events.len() - first_path, result.steps());
    assert_eq!(first_path, result.stats.expansions);
}

#[test]
fn dynamic_obstacles_never_block_endpoints() {
    let start = Position::new(0, 0);
    let target = Position::new(11, 11);
    let options = SearchOptions {
        obstacle_probability: 1.0,
        seed: Some(17),
        ..SearchOptions::default().instant()
    };

    for algorithm in Algorithm::ALL {
        let mut grid = open_grid(12, start, target);
        let result = run(algorithm, &mut grid, &options);

        assert!(grid.is_passable(start), "{algorithm}");
        assert!(grid.is_passable(target), "{algorithm}");
        assert_eq!(grid.obstacle_count(), result.stats.obstacles_spawned, "{algorithm}");
        if result.found() {
            assert_valid_path(&grid, &result, false);
        }
    }
}
