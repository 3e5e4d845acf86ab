use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::maze::Grid;

use super::{
    frontier::{self, Entry, Frontier},
    traits::{PathfindingAlgorithm, SearchResult},
};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: usize,
    id: usize,
}

// min-heap on cost, ties go to the lower cell index
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct CostQueue(BinaryHeap<State>);

impl Frontier for CostQueue {
    fn push(&mut self, entry: Entry) {
        self.0.push(State {
            cost: entry.cost,
            id: entry.id,
        });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop().map(|State { cost, id }| Entry { id, cost })
    }
}

pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn find_path(&self, grid: &Grid) -> SearchResult {
        frontier::search(grid, CostQueue::default(), frontier::unit_cost)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
