mod grid_solver;

pub use grid_solver::{GridSolver, SolveReport};
