use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use dynamic_search::comparison::{print_comparison_results, run_all_algorithms};
use dynamic_search::config::Config;
use dynamic_search::render::TerminalObserver;
use dynamic_search::statistics::{optimal_path_length, RunStatistics};
use dynamic_search::{run_search, Algorithm};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.log_level.as_deref());

    println!("Starting grid search...");
    println!("Grid size: {}x{}", config.grid_size, config.grid_size);
    println!("Algorithm: {}", config.algorithm);
    println!(
        "Dynamic obstacle probability: {}",
        config.obstacle_probability
    );

    let options = config.search_options();
    let mut grid = config.build_grid().context("failed to build the grid")?;

    if config.compares_all() {
        let results = run_all_algorithms(&grid, &options, config.timeout())
            .context("comparison run failed")?;
        print_comparison_results(&results);
        return Ok(());
    }

    let algorithm: Algorithm = config
        .algorithm
        .parse()
        .context("failed to select an algorithm")?;

    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
    }
    println!();

    let optimal = optimal_path_length(&grid);
    let mut observer =
        TerminalObserver::new(algorithm.as_str(), !config.no_visualization, config.timeout());
    let started = Instant::now();
    let result = run_search(algorithm, &mut grid, &mut observer, &options)
        .context("search could not start")?;
    let stats = RunStatistics::new(algorithm, &result, optimal, started.elapsed());

    println!("\n=== FINAL RESULTS ===");
    if result.found() {
        println!("SUCCESS: path of {} moves", result.steps());
        let cells: Vec<String> = result.path.iter().map(ToString::to_string).collect();
        println!("Path: {}", cells.join(" -> "));
    } else if observer.timed_out() {
        println!("CANCELLED: timeout reached before the target was found");
    } else {
        println!("FAILED: no path found");
    }
    println!("{}", stats);

    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
