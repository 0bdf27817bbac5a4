use std::path::Path;
use tracing::{debug, trace, warn};

use super::loader;
use super::matrix::AdjacencyMatrix;
use super::traits::ShortestPathSolver;
use super::tree::ShortestPathTree;
use common::{
    error::Error,
    relaxation::{relax, relax_unbounded},
    types::{NegativeCycle, Weight},
};

/// Solver implementing the Bellman-Ford algorithm for single-source shortest
/// paths with arbitrary edge weights, and negative cycle detection.
///
/// Every run performs exactly `N - 1` passes over the row-major edge list
/// followed by one verification pass; there is no early termination. Cycles
/// the source cannot reach are never relaxed and so never reported.
#[derive(Debug, Clone)]
pub struct BellmanFordSolver {
    graph: AdjacencyMatrix,
    source: usize,
    tree: ShortestPathTree,
}

impl BellmanFordSolver {
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

    /// Reconstructs a negative cycle after the verification pass detects one.
    ///
    /// The vertex flagged by the verification pass may sit downstream of the
    /// cycle rather than on it. Walking `N` predecessor steps back from it is
    /// guaranteed to land on the cycle, which is then traced until it closes.
    ///
    /// # Returns
    /// The cycle's vertices in forward order and the sum of its edge weights.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if `start` is out of bounds, or
    /// `Error::CycleReconstructionFailed` if the cycle cannot be reconstructed.
    pub fn reconstruct_cycle(
        &self,
        start: usize,
        predecessor: &[Option<usize>],
    ) -> Result<NegativeCycle, Error> {
        let num_nodes = self.graph.num_vertices();
        if start >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(start));
        }

        let mut trace_node = start;
        for _ in 0..num_nodes {
            trace_node = predecessor[trace_node].ok_or(Error::CycleReconstructionFailed)?;
        }

        let cycle_start_node = trace_node;
        let mut vertices = Vec::new();
        let mut current_node = cycle_start_node;

        loop {
            if vertices.len() == num_nodes {
                return Err(Error::CycleReconstructionFailed);
            }
            vertices.push(current_node);

            current_node = predecessor[current_node].ok_or(Error::CycleReconstructionFailed)?;
            if current_node == cycle_start_node {
                break;
            }
        }

        vertices.reverse();

        // Saturates at `Weight::MIN` for cycles too heavy to sum exactly.
        let len = vertices.len();
        let total_weight = (0..len).fold(0 as Weight, |sum, i| {
            sum.saturating_add(self.graph.weight(vertices[i], vertices[(i + 1) % len]))
        });

        let cycle = NegativeCycle {
            vertices,
            total_weight,
        };
        if !cycle.is_negative() {
            return Err(Error::CycleReconstructionFailed);
        }
        Ok(cycle)
    }
}

impl ShortestPathSolver for BellmanFordSolver {
    fn run(&mut self) -> Result<(), Error> {
        self.tree = ShortestPathTree::default();

        let num_nodes = self.graph.num_vertices();
        if self.source >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(self.source));
        }

        let mut tree = ShortestPathTree::seeded(num_nodes, self.source);
        let edges = self.graph.edges();

        for pass in 1..num_nodes {
            let mut relaxed = 0usize;
            for &(u, v, weight) in &edges {
                if let Some(candidate) = relax(&tree.distance, u, v, weight)? {
                    tree.update(v, candidate, u);
                    relaxed += 1;
                }
            }
            trace!(pass, relaxed, "bellman-ford pass complete");
        }

        // Any edge that still improves after N - 1 passes lies on, or
        // downstream of, a negative cycle reachable from the source. An
        // underflow here can only come from such a cycle.
        let settled_distance = tree.distance.clone();
        let mut flagged = None;
        for &(u, v, weight) in &edges {
            if let Some(candidate) = relax_unbounded(&tree.distance, u, v, weight) {
                tree.update(v, candidate, u);
                flagged = Some(v);
            }
        }

        match flagged {
            Some(vertex) => {
                tree.distance = settled_distance;
                let cycle = self.reconstruct_cycle(vertex, &tree.predecessor)?;
                warn!(
                    source = self.source,
                    cycle = ?cycle.vertices,
                    total_weight = cycle.total_weight,
                    "negative cycle reachable from source"
                );
                tree.invalidate(cycle);
            }
            None => tree.finish(),
        }

        self.tree = tree;

        debug!(
            source = self.source,
            vertices = num_nodes,
            edges = edges.len(),
            valid = self.tree.is_valid(),
            "bellman-ford run complete"
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
