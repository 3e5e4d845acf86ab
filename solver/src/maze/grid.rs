use super::{
    cell::Cell,
    position::{Direction, Position},
};
use crate::error::{MapError, MapResult};

/// Fixed-size map stored as a flat row-major cell array.
///
/// A `Grid` can only be built through [`Grid::new`], which checks the cell
/// count and that both endpoints are in bounds and walkable, so every search
/// can index it without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    pub fn new(
        width: usize,
        height: usize,
        start: Position,
        goal: Position,
        cells: Vec<Cell>,
    ) -> MapResult<Self> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyGrid { width, height });
        }

        let expected = width
            .checked_mul(height)
            .ok_or(MapError::TooLarge { width, height })?;
        if cells.len() != expected {
            return Err(MapError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let grid = Self {
            cells,
            width,
            height,
            start,
            goal,
        };
        grid.check_endpoint("START", start)?;
        grid.check_endpoint("GOAL", goal)?;

        Ok(grid)
    }

    fn check_endpoint(&self, endpoint: &'static str, pos: Position) -> MapResult<()> {
        if pos.row >= self.height || pos.col >= self.width {
            return Err(MapError::EndpointOutOfBounds {
                endpoint,
                row: pos.row,
                col: pos.col,
                width: self.width,
                height: self.height,
            });
        }

        if self.is_blocked(pos.row, pos.col) {
            return Err(MapError::EndpointBlocked {
                endpoint,
                row: pos.row,
                col: pos.col,
            });
        }

        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn start_index(&self) -> usize {
        self.start.to_index(self.width)
    }

    pub fn goal_index(&self) -> usize {
        self.goal.to_index(self.width)
    }

    /// `WxH grid, start (r, c), goal (r, c)`
    pub fn summary(&self) -> String {
        format!(
            "{}x{} grid, start {}, goal {}",
            self.width, self.height, self.start, self.goal
        )
    }

    pub fn cell(&self, id: usize) -> Cell {
        self.cells[id]
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Panics if `(row, col)` is out of bounds; check [`Grid::in_bounds`] first.
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.to_index(row, col)].is_blocked()
    }

    pub fn to_index(&self, row: usize, col: usize) -> usize {
        Position::new(row, col).to_index(self.width)
    }

    pub fn from_index(&self, id: usize) -> Position {
        Position::from_index(id, self.width)
    }

    /// Walkable 4-neighbors of `id`, always in up, down, left, right order.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        let pos = self.from_index(id);

        Direction::ALL
            .into_iter()
            .map(|dir| pos.step(dir))
            .filter(|&(row, col)| self.in_bounds(row, col))
            .map(|(row, col)| (row as usize, col as usize))
            .filter(|&(row, col)| !self.is_blocked(row, col))
            .map(|(row, col)| self.to_index(row, col))
            .collect()
    }
}
