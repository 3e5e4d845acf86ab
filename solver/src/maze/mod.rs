mod cell;
mod grid;
mod loader;
mod position;

pub use cell::Cell;
pub use grid::Grid;
pub use loader::{load_map, parse_map};
pub use position::{Direction, Position};
