mod algorithms;
mod cli;
mod error;
mod logging;
mod maze;
mod render;
mod solvers;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info};

use algorithms::pathfinding;
use cli::{Args, PathfindingAlgorithm};
use logging::Logger;
use maze::Grid;
use solvers::{GridSolver, SolveReport};

fn main() -> Result<()> {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    Logger::init(args.verbosity);

    let grid = load_grid(&args)?;

    let mut completed = Vec::new();
    for algorithm in args.algo.algorithms() {
        info!("solving with {}", algorithm.name());

        let report = solve(&grid, algorithm);
        print_result(&grid, algorithm, &report);
        completed.push((algorithm.name(), report));
    }

    if completed.len() > 1 {
        print_benchmark_summary(&completed);
    }

    Ok(())
}

fn load_grid(args: &Args) -> Result<Grid> {
    if args.generate {
        eyre::bail!("map generation is not supported, pass --map <FILE> instead");
    }

    let Some(ref path) = args.map else {
        eyre::bail!("no map file given");
    };

    info!("loading map: {}", path.display());
    let grid = maze::load_map(path)
        .wrap_err_with(|| format!("could not load map {}", path.display()))?;
    debug!("{}", grid.summary());

    Ok(grid)
}

fn solve(grid: &Grid, algorithm: PathfindingAlgorithm) -> SolveReport {
    match algorithm {
        PathfindingAlgorithm::BFS => GridSolver::new(pathfinding::BFS).solve(grid),
        PathfindingAlgorithm::Dijkstra => GridSolver::new(pathfinding::Dijkstra).solve(grid),
        PathfindingAlgorithm::AStar => GridSolver::new(pathfinding::AStar).solve(grid),
    }
}

// ========== Output ==========

fn print_result(grid: &Grid, algorithm: PathfindingAlgorithm, report: &SolveReport) {
    println!("== {} ==", algorithm.name());
    print!("{}", render::render(grid, &report.result));
    println!("{}", render::status_line(&report.result));
    println!();
}

fn print_benchmark_summary(results: &[(&str, SolveReport)]) {
    info!("benchmark results:");
    info!(
        "{:<12} {:>6}  {:>8}  {:>8}  {:>12}",
        "algorithm", "found", "steps", "visited", "plan"
    );
    info!("{:-<52}", "");

    for (name, report) in results {
        let steps = report
            .result
            .steps()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        info!(
            "{:<12} {:>6}  {:>8}  {:>8}  {:>12?}",
            name,
            report.result.found,
            steps,
            report.result.visited_count(),
            report.planning_time,
        );
    }

    if let Some((name, report)) = results
        .iter()
        .min_by_key(|(_, r)| r.result.visited_count())
    {
        info!(
            "fewest visited: {} ({} cells)",
            name,
            report.result.visited_count()
        );
    }

    if let Some((name, report)) = results.iter().min_by_key(|(_, r)| r.planning_time) {
        info!("fastest: {} ({:?})", name, report.planning_time);
    }
}
