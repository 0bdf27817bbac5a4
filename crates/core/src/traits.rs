use super::matrix::AdjacencyMatrix;
use super::tree::ShortestPathTree;
use common::{
    error::Error,
    types::{Route, Weight},
};

/// Trait for single-source shortest-path solvers that own their graph.
///
/// `run()` rebuilds the solver's [`ShortestPathTree`]; the query methods read
/// from the last completed run.
pub trait ShortestPathSolver {
    /// Computes distances and predecessors from the solver's source.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if the source is not a vertex of
    /// the graph, or `Error::WeightOverflow` if a distance leaves the range of
    /// `Weight`.
    fn run(&mut self) -> Result<(), Error>;

    fn graph(&self) -> &AdjacencyMatrix;

    fn tree(&self) -> &ShortestPathTree;

    /// Tagged result for `target`.
    fn route(&self, target: usize) -> Result<Route, Error> {
        if target >= self.graph().num_vertices() {
            return Err(Error::NodeIndexOutOfBounds(target));
        }
        self.tree().route(target)
    }

    /// Vertices from the source to `target`, or `[0]` when no path can be reported.
    fn shortest_path(&self, target: usize) -> Result<Vec<usize>, Error> {
        Ok(self.route(target)?.into_path())
    }

    /// Total weight of the path to `target`, or `0` when no path can be reported.
    fn shortest_weight(&self, target: usize) -> Result<Weight, Error> {
        Ok(self.route(target)?.weight())
    }

    fn is_valid(&self) -> bool {
        self.tree().is_valid()
    }
}
