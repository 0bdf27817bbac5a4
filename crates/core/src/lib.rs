pub mod bellman_ford;
pub mod dijkstra;
pub mod loader;
pub mod matrix;
pub mod traits;
pub mod tree;

pub use bellman_ford::BellmanFordSolver;
pub use dijkstra::DijkstraSolver;
pub use matrix::AdjacencyMatrix;
pub use traits::ShortestPathSolver;
pub use tree::{ShortestPathTree, TreeStatus};
