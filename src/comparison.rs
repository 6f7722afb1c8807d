use std::time::{Duration, Instant};

use crate::algorithms::Algorithm;
use crate::engine::{run_search, SearchOptions};
use crate::error::Result;
use crate::grid::Grid;
use crate::render::TerminalObserver;
use crate::statistics::{optimal_path_length, RunStatistics};

/// Runs every strategy on its own copy of `grid`.
///
/// All runs share one injector seed so they face the same obstacle draws; a
/// seed is generated when `options` has none.
pub fn run_all_algorithms(
    grid: &Grid,
    options: &SearchOptions,
    timeout: Option<Duration>,
) -> Result<Vec<RunStatistics>> {
    let seed = options.seed.unwrap_or_else(rand::random::<u64>);
    let options = SearchOptions {
        seed: Some(seed),
        ..options.instant()
    };
    let optimal = optimal_path_length(grid);

    println!("Running comparison of {} algorithms...", Algorithm::ALL.len());
    println!("Injector seed: {} (for reproducibility)", seed);
    println!(
        "Grid {}x{}, obstacles: {}",
        grid.size,
        grid.size,
        grid.obstacle_count()
    );
    println!();

    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        println!(
            "Running algorithm {} of {}: {}",
            i + 1,
            Algorithm::ALL.len(),
            algorithm
        );
        let mut run_grid = grid.clone();
        let mut observer = TerminalObserver::new(algorithm.as_str(), false, timeout);
        let started = Instant::now();
        let result = run_search(algorithm, &mut run_grid, &mut observer, &options)?;
        results.push(RunStatistics::new(
            algorithm,
            &result,
            optimal,
            started.elapsed(),
        ));
    }

    Ok(results)
}

/// Print comparison results in a table
pub fn print_comparison_results(results: &[RunStatistics]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<15} {:<10} {:<8} {:<8} {:<12} {:<12} {:<10} {:<12}",
        "Algorithm", "Outcome", "Moves", "Optimal", "Efficiency", "Expansions", "Spawned", "Elapsed"
    );
    println!("{}", "-".repeat(95));

    for result in results {
        let optimal = result
            .optimal_path_length
            .map(|len| len.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<15} {:<10} {:<8} {:<8} {:<12} {:<12} {:<10} {:<12}",
            result.algorithm.as_str(),
            result.outcome.as_str(),
            result.path_length,
            optimal,
            format!("{:.3}", result.route_efficiency),
            result.expansions,
            result.obstacles_spawned,
            format!("{:.2?}", result.elapsed),
        );
    }
    println!();

    let successful: Vec<_> = results.iter().filter(|r| r.found()).collect();
    if successful.is_empty() {
        println!("No algorithm reached the target.");
        return;
    }

    println!("=== PERFORMANCE ANALYSIS ===");
    if let Some(best) = successful.iter().min_by_key(|r| r.path_length) {
        println!("Shortest path: {} ({} moves)", best.algorithm, best.path_length);
    }
    if let Some(leanest) = successful.iter().min_by_key(|r| r.expansions) {
        println!(
            "Fewest expansions: {} ({} nodes)",
            leanest.algorithm, leanest.expansions
        );
    }
    if let Some(fastest) = successful.iter().min_by_key(|r| r.elapsed) {
        println!("Fastest: {} ({:.2?})", fastest.algorithm, fastest.elapsed);
    }
}
