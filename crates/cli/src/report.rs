use std::fmt;
use tracing::{debug, warn};

use common::{
    error::Error,
    types::{NegativeCycle, Route},
};
use shortest_path_core::ShortestPathSolver;

/// Result of a `solve` invocation for one target vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub target: usize,
    pub route: Route,
    pub negative_cycle: Option<NegativeCycle>,
}

impl Report {
    pub fn from_solver(solver: &dyn ShortestPathSolver, target: usize) -> Result<Self, Error> {
        Ok(Self {
            target,
            route: solver.route(target)?,
            negative_cycle: solver.tree().negative_cycle().cloned(),
        })
    }

    /// Emits a warning for results that print as placeholders.
    pub fn log(&self) {
        match (&self.route, &self.negative_cycle) {
            (Route::Found(path), _) => debug!(
                target_vertex = self.target,
                hops = path.hops(),
                weight = path.weight,
                "shortest path found"
            ),
            (_, Some(cycle)) => warn!(
                target_vertex = self.target,
                cycle = ?cycle.vertices,
                total_weight = cycle.total_weight,
                "negative cycle reachable from source; no shortest path exists"
            ),
            (Route::Unreachable, None) => {
                warn!(target_vertex = self.target, "target is unreachable from source")
            }
            (Route::Unavailable, None) => {
                warn!(target_vertex = self.target, "no shortest-path tree available")
            }
        }
    }
}

/// Two lines: total weight and path, using `0` / `[0]` when there is no path.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest path total weight: {}", self.route.weight())?;
        writeln!(f, "Shortest path: {:?}", self.route.clone().into_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortest_path_core::{AdjacencyMatrix, BellmanFordSolver, DijkstraSolver};

    #[test]
    fn renders_found_path() {
        let graph = AdjacencyMatrix::from_edges(3, &[(0, 1, 2), (1, 2, 3)]).unwrap();
        let mut solver = DijkstraSolver::new(graph);
        solver.run().unwrap();

        let report = Report::from_solver(&solver, 2).unwrap();
        assert_eq!(
            report.to_string(),
            "Shortest path total weight: 5\nShortest path: [0, 1, 2]\n"
        );
        assert!(report.negative_cycle.is_none());
    }

    #[test]
    fn renders_placeholders_for_negative_cycle() {
        let graph = AdjacencyMatrix::from_edges(2, &[(0, 1, -1), (1, 0, -1)]).unwrap();
        let mut solver = BellmanFordSolver::new(graph);
        solver.run().unwrap();

        let report = Report::from_solver(&solver, 1).unwrap();
        assert_eq!(report.route, Route::Unavailable);
        assert!(report.negative_cycle.is_some());
        assert_eq!(
            report.to_string(),
            "Shortest path total weight: 0\nShortest path: [0]\n"
        );
    }

    #[test]
    fn out_of_bounds_target_is_an_error() {
        let graph = AdjacencyMatrix::from_edges(2, &[(0, 1, 1)]).unwrap();
        let mut solver = DijkstraSolver::new(graph);
        solver.run().unwrap();

        assert!(matches!(
            Report::from_solver(&solver, 9),
            Err(Error::NodeIndexOutOfBounds(9))
        ));
    }
}
