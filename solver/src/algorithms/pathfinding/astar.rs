use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::maze::{Grid, Position};

use super::{
    frontier::{self, Entry, Frontier},
    heuristic::manhattan_distance,
    traits::{PathfindingAlgorithm, SearchResult},
};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    f_score: usize,
    g_score: usize,
    id: usize,
}

// lowest f first; on ties prefer the deeper node, then the lower cell index
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| self.g_score.cmp(&other.g_score))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct HeuristicQueue {
    heap: BinaryHeap<State>,
    goal: Position,
    width: usize,
}

impl HeuristicQueue {
    fn new(grid: &Grid) -> Self {
        Self {
            heap: BinaryHeap::new(),
            goal: grid.goal(),
            width: grid.width(),
        }
    }
}

impl Frontier for HeuristicQueue {
    fn push(&mut self, entry: Entry) {
        let h = manhattan_distance(Position::from_index(entry.id, self.width), self.goal);
        self.heap.push(State {
            f_score: entry.cost + h,
            g_score: entry.cost,
            id: entry.id,
        });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap
            .pop()
            .map(|State { g_score, id, .. }| Entry { id, cost: g_score })
    }
}

pub struct AStar;

impl PathfindingAlgorithm for AStar {
    fn find_path(&self, grid: &Grid) -> SearchResult {
        frontier::search(grid, HeuristicQueue::new(grid), frontier::unit_cost)
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
