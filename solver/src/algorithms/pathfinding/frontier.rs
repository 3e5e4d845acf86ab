//! The search loop shared by every pathfinding algorithm.
//!
//! Each algorithm only supplies a [`Frontier`], the order in which
//! discovered cells are processed. Discovery, settling, parent bookkeeping
//! and path reconstruction all live here.

use crate::maze::Grid;

use super::traits::SearchResult;

/// cost of a cell that has not been reached yet
pub const UNREACHED: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub id: usize,
    /// accumulated cost from start (g)
    pub cost: usize,
}

pub trait Frontier {
    fn push(&mut self, entry: Entry);

    fn pop(&mut self) -> Option<Entry>;
}

/// every move costs the same
pub fn unit_cost(_from: usize, _to: usize) -> usize {
    1
}

/// Runs a search from the grid's start to its goal.
///
/// A cell is settled when it is popped; stale entries for settled cells are
/// skipped. A neighbor is (re)pushed only when `cost + edge_cost` improves
/// its known cost, so a FIFO frontier with unit costs pushes every cell at
/// most once.
pub fn search<F, C>(grid: &Grid, mut frontier: F, edge_cost: C) -> SearchResult
where
    F: Frontier,
    C: Fn(usize, usize) -> usize,
{
    let start = grid.start_index();
    let goal = grid.goal_index();

    let mut costs = vec![UNREACHED; grid.len()];
    let mut parents: Vec<Option<usize>> = vec![None; grid.len()];
    let mut settled = vec![false; grid.len()];

    costs[start] = 0;
    frontier.push(Entry {
        id: start,
        cost: 0,
    });

    while let Some(Entry { id, cost }) = frontier.pop() {
        if settled[id] || cost > costs[id] {
            continue;
        }

        settled[id] = true;
        log::trace!("settled {} at cost {}", grid.from_index(id), cost);

        if id == goal {
            let path = reconstruct_path(&parents, goal);
            debug_assert!(path.windows(2).all(|pair| {
                grid.from_index(pair[0])
                    .is_adjacent(grid.from_index(pair[1]))
            }));
            return SearchResult::found(settled, path);
        }

        for neighbor in grid.neighbors(id) {
            if settled[neighbor] {
                continue;
            }

            let tentative = cost + edge_cost(id, neighbor);
            if tentative < costs[neighbor] {
                costs[neighbor] = tentative;
                parents[neighbor] = Some(id);
                frontier.push(Entry {
                    id: neighbor,
                    cost: tentative,
                });
            }
        }
    }

    SearchResult::not_found(settled)
}

/// Follows parents back from `goal` to the cell without one, start first.
pub fn reconstruct_path(parents: &[Option<usize>], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(prev) = parents[current] {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_in_start_to_goal_order() {
        // 0 -> 3 -> 4 -> 1
        let parents = vec![None, Some(4), None, Some(0), Some(3)];
        assert_eq!(reconstruct_path(&parents, 1), vec![0, 3, 4, 1]);
        assert_eq!(reconstruct_path(&parents, 0), vec![0]);
    }

    #[test]
    fn unit_cost_is_constant() {
        assert_eq!(unit_cost(0, 1), 1);
        assert_eq!(unit_cost(7, 3), 1);
    }
}
