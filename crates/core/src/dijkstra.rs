use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::path::Path;
use tracing::debug;

use super::loader;
use super::matrix::AdjacencyMatrix;
use super::traits::ShortestPathSolver;
use super::tree::ShortestPathTree;
use common::{error::Error, relaxation::relax};

/// Solver implementing Dijkstra's algorithm for graphs whose edge weights are
/// all positive.
///
/// Vertices are extracted from a binary heap keyed by `(distance, vertex)`.
/// Relaxations push a new heap entry instead of decreasing an existing key;
/// stale entries are skipped when popped. Negative weights are not checked
/// for: a settled vertex is never revisited, so a negative edge into it is
/// ignored.
#[derive(Debug, Clone)]
pub struct DijkstraSolver {
    graph: AdjacencyMatrix,
    source: usize,
    tree: ShortestPathTree,
}

impl DijkstraSolver {
    /// Creates a solver rooted at vertex 0.
    pub fn new(graph: AdjacencyMatrix) -> Self {
        Self::with_source(graph, 0)
    }

    pub fn with_source(graph: AdjacencyMatrix, source: usize) -> Self {
        Self {
            graph,
            source,
            tree: ShortestPathTree::default(),
        }
    }

    /// Loads an adjacency-matrix text file and creates a solver rooted at vertex 0.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self::new(loader::load_matrix(path)?))
    }

    pub fn source(&self) -> usize {
        self.source
    }
}

impl ShortestPathSolver for DijkstraSolver {
    fn run(&mut self) -> Result<(), Error> {
        self.tree = ShortestPathTree::default();

        let num_nodes = self.graph.num_vertices();
        if self.source >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(self.source));
        }

        let mut tree = ShortestPathTree::seeded(num_nodes, self.source);
        let mut settled = vec![false; num_nodes];
        let mut heap = BinaryHeap::with_capacity(num_nodes);
        let mut relaxations = 0usize;

        heap.push(Reverse((0, self.source)));

        while let Some(Reverse((_, u))) = heap.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for (v, weight) in self.graph.neighbors(u) {
                if settled[v] {
                    continue;
                }
                if let Some(candidate) = relax(&tree.distance, u, v, weight)? {
                    tree.update(v, candidate, u);
                    heap.push(Reverse((candidate, v)));
                    relaxations += 1;
                }
            }
        }

        tree.finish();
        self.tree = tree;

        debug!(
            source = self.source,
            vertices = num_nodes,
            settled = settled.iter().filter(|&&s| s).count(),
            relaxations,
            "dijkstra run complete"
        );
        Ok(())
    }

    fn graph(&self) -> &AdjacencyMatrix {
        &self.graph
    }

    fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }
}

#[cfg(test)]
mod dijkstra_tests {
    use super::*;
    use common::types::{Route, Weight};

    fn solver_for(rows: Vec<Vec<Weight>>) -> DijkstraSolver {
        DijkstraSolver::new(AdjacencyMatrix::from_rows(rows).unwrap())
    }

    /// 0 -> 1 (1), 1 -> 2 (2), 0 -> 2 (5), 2 -> 3 (1)
    fn four_vertex_graph() -> Vec<Vec<Weight>> {
        vec![
            vec![0, 1, 5, 0],
            vec![0, 0, 2, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]
    }

    #[test]
    fn finds_cheaper_indirect_path() {
        let mut solver = solver_for(four_vertex_graph());
        solver.run().unwrap();

        assert_eq!(solver.shortest_path(3).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(solver.shortest_weight(3).unwrap(), 4);
        assert_eq!(solver.shortest_weight(2).unwrap(), 3);
        assert_eq!(solver.tree().distances(), &[Some(0), Some(1), Some(3), Some(4)]);
    }

    #[test]
    fn extraction_follows_distance_not_index() {
        // Index-order extraction would settle 1 before 2 and miss 0 -> 2 -> 1.
        let mut solver = solver_for(vec![
            vec![0, 10, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        solver.run().unwrap();

        assert_eq!(solver.shortest_path(3).unwrap(), vec![0, 2, 1, 3]);
        assert_eq!(solver.shortest_weight(3).unwrap(), 4);
    }

    #[test]
    fn unreachable_vertex_gets_placeholders() {
        let mut solver = solver_for(vec![vec![0, 3, 0], vec![0, 0, 0], vec![1, 0, 0]]);
        solver.run().unwrap();

        assert_eq!(solver.route(2).unwrap(), Route::Unreachable);
        assert_eq!(solver.shortest_path(2).unwrap(), vec![0]);
        assert_eq!(solver.shortest_weight(2).unwrap(), 0);
        assert_eq!(solver.tree().predecessors()[2], None);
    }

    #[test]
    fn queries_before_run_are_unavailable() {
        let solver = solver_for(four_vertex_graph());

        assert!(!solver.is_valid());
        assert_eq!(solver.route(3).unwrap(), Route::Unavailable);
        assert_eq!(solver.shortest_path(3).unwrap(), vec![0]);
        assert_eq!(solver.shortest_weight(3).unwrap(), 0);
    }

    #[test]
    fn run_is_idempotent() {
        let mut solver = solver_for(four_vertex_graph());

        solver.run().unwrap();
        let first = solver.tree().clone();
        solver.run().unwrap();

        assert_eq!(solver.tree(), &first);
    }

    #[test]
    fn ties_keep_first_settled_predecessor() {
        // Two equal-cost routes to 3: through 1 and through 2.
        let mut solver = solver_for(vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        solver.run().unwrap();

        assert_eq!(solver.tree().predecessors()[3], Some(1));
        assert_eq!(solver.shortest_path(3).unwrap(), vec![0, 1, 3]);
    }

    #[test]
    fn explicit_source() {
        let graph = AdjacencyMatrix::from_rows(four_vertex_graph()).unwrap();
        let mut solver = DijkstraSolver::with_source(graph, 1);
        solver.run().unwrap();

        assert_eq!(solver.shortest_path(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(solver.shortest_weight(3).unwrap(), 3);
        assert_eq!(solver.route(0).unwrap(), Route::Unreachable);
    }

    #[test]
    fn settled_vertices_are_not_revisited() {
        // 0 -> 2 settles at 1 before the negative edge 1 -> 2 is seen.
        let mut solver = solver_for(vec![vec![0, 2, 1], vec![0, 0, -3], vec![0, 0, 0]]);
        solver.run().unwrap();

        assert_eq!(solver.shortest_weight(2).unwrap(), 1);
        assert_eq!(solver.shortest_path(2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn single_node_graph() {
        let mut solver = solver_for(vec![vec![0]]);
        solver.run().unwrap();

        assert_eq!(solver.shortest_path(0).unwrap(), vec![0]);
        assert_eq!(solver.shortest_weight(0).unwrap(), 0);
    }

    #[test]
    fn empty_graph_returns_error() {
        let mut solver = solver_for(vec![]);
        let result = solver.run();

        assert!(matches!(result, Err(Error::NodeIndexOutOfBounds(0))));
        assert!(!solver.is_valid());
    }

    #[test]
    fn target_out_of_bounds_returns_error() {
        let mut solver = solver_for(four_vertex_graph());
        solver.run().unwrap();

        assert!(matches!(solver.route(4), Err(Error::NodeIndexOutOfBounds(4))));
    }

    #[test]
    fn overflow_is_an_error() {
        let mut solver = solver_for(vec![
            vec![0, Weight::MAX, 0],
            vec![0, 0, 1],
            vec![0, 0, 0],
        ]);
        let result = solver.run();

        assert!(matches!(result, Err(Error::WeightOverflow { from: 1, to: 2 })));
        assert_eq!(solver.route(1).unwrap(), Route::Unavailable);
    }

    // ----------------------------
    // Stress and edge-case tests
    // ----------------------------

    #[test]
    fn large_linear_graph() {
        let n = 500;
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1, 2)).collect();
        let graph = AdjacencyMatrix::from_edges(n, &edges).unwrap();
        let mut solver = DijkstraSolver::new(graph);
        solver.run().unwrap();

        let path = solver.shortest_path(n - 1).unwrap();
        assert_eq!(path.len(), n);
        assert_eq!(solver.shortest_weight(n - 1).unwrap(), 2 * (n as Weight - 1));
    }
}
