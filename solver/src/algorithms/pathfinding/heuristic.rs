use crate::maze::Position;

/// Manhattan distance; admissible and consistent on a 4-connected unit-cost grid.
pub fn manhattan_distance(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
