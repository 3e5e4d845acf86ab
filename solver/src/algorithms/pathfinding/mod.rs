mod astar;
mod bfs;
mod dijkstra;
pub mod frontier;
pub mod heuristic;
pub mod traits;

pub use astar::AStar;
pub use bfs::BFS;
pub use dijkstra::Dijkstra;
pub use traits::{PathfindingAlgorithm, SearchResult};
