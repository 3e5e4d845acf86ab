use std::time::{Duration, Instant};

use crate::algorithms::pathfinding::{PathfindingAlgorithm, SearchResult};
use crate::maze::Grid;

pub struct SolveReport {
    pub result: SearchResult,
    pub planning_time: Duration,
}

/// Runs one algorithm over a fully known grid and times it.
pub struct GridSolver<A: PathfindingAlgorithm> {
    algorithm: A,
}

impl<A: PathfindingAlgorithm> GridSolver<A> {
    pub fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub fn solve(&self, grid: &Grid) -> SolveReport {
        log::debug!("{}: {}", self.algorithm.name(), grid.summary());

        let planning_start = Instant::now();
        let result = self.algorithm.find_path(grid);
        let planning_time = planning_start.elapsed();

        match result.steps() {
            Some(steps) => log::info!(
                "{}: planned {} steps in {:?}, {} cells visited",
                self.algorithm.name(),
                steps,
                planning_time,
                result.visited_count()
            ),
            None => log::warn!(
                "{}: no path after visiting {} cells ({:?})",
                self.algorithm.name(),
                result.visited_count(),
                planning_time
            ),
        }

        SolveReport {
            result,
            planning_time,
        }
    }
}
