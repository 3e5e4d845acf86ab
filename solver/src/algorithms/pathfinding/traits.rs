use crate::maze::Grid;

pub trait PathfindingAlgorithm {
    /// Searches from the grid's start to its goal.
    fn find_path(&self, grid: &Grid) -> SearchResult;

    fn name(&self) -> &'static str;
}

/// Outcome of a single search.
///
/// `visited[i]` is true iff cell `i` was dequeued/settled. When `found`,
/// `path` runs from start to goal inclusive through 4-adjacent cells;
/// otherwise it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub visited: Vec<bool>,
    pub path: Vec<usize>,
}

impl SearchResult {
    pub fn found(visited: Vec<bool>, path: Vec<usize>) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            found: true,
            visited,
            path,
        }
    }

    pub fn not_found(visited: Vec<bool>) -> Self {
        Self {
            found: false,
            visited,
            path: Vec::new(),
        }
    }

    /// edges traversed, `None` without a path
    pub fn steps(&self) -> Option<usize> {
        self.found.then(|| self.path.len() - 1)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}
