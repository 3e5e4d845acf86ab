use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid-solver")]
#[command(about = "Grid pathfinding with BFS, Dijkstra and A*")]
#[command(group(ArgGroup::new("source").required(true).args(["map", "generate"])))]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Map file to load
    #[arg(short, long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Generate a random map instead of loading one (not supported)
    #[arg(short, long)]
    pub generate: bool,

    /// Algorithm to run
    #[arg(short, long, value_enum)]
    pub algo: AlgorithmChoice,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Breadth-first search
    Bfs,

    /// Dijkstra's shortest path algorithm
    Dijkstra,

    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Run all three in order: BFS, Dijkstra, A*
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<PathfindingAlgorithm> {
        match self {
            Self::Bfs => vec![PathfindingAlgorithm::BFS],
            Self::Dijkstra => vec![PathfindingAlgorithm::Dijkstra],
            Self::AStar => vec![PathfindingAlgorithm::AStar],
            Self::All => PathfindingAlgorithm::all().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathfindingAlgorithm {
    #[allow(clippy::upper_case_acronyms)]
    BFS,
    Dijkstra,
    AStar,
}

impl PathfindingAlgorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BFS, Self::Dijkstra, Self::AStar].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BFS => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}
