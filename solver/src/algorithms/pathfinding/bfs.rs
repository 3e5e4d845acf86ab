use std::collections::VecDeque;

use crate::maze::Grid;

use super::{
    frontier::{self, Entry, Frontier},
    traits::{PathfindingAlgorithm, SearchResult},
};

/// FIFO frontier. Costs leave it in non-decreasing order, so the first time a
/// cell is discovered is also its cheapest and it is enqueued exactly once.
#[derive(Default)]
struct Queue(VecDeque<Entry>);

impl Frontier for Queue {
    fn push(&mut self, entry: Entry) {
        self.0.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop_front()
    }
}

#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl PathfindingAlgorithm for BFS {
    fn find_path(&self, grid: &Grid) -> SearchResult {
        frontier::search(grid, Queue::default(), frontier::unit_cost)
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
