use common::error::Error;
use common::types::{NegativeCycle, Route, ShortestPath, Weight};

/// Whether a [`ShortestPathTree`] can answer queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TreeStatus {
    /// `run()` has not completed yet.
    #[default]
    NotRun,
    Valid,
    /// A negative cycle is reachable from the source; no shortest-path tree exists.
    NegativeCycle(NegativeCycle),
}

/// Per-run solver state: tentative distances and predecessor pointers from
/// one source.
///
/// - `distance[v]`: shortest known distance from the source, `None` while `v`
///   is unreached.
/// - `predecessor[v]`: previous vertex on the shortest path to `v`, `None`
///   for the source and for unreached vertices. Emptied when a negative cycle
///   is detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub(crate) source: usize,
    pub(crate) distance: Vec<Option<Weight>>,
    pub(crate) predecessor: Vec<Option<usize>>,
    pub(crate) status: TreeStatus,
}

impl ShortestPathTree {
    /// Fresh state for a run: everything unreached except `source` at distance 0.
    pub(crate) fn seeded(num_vertices: usize, source: usize) -> Self {
        let mut distance = vec![None; num_vertices];
        distance[source] = Some(0);

        Self {
            source,
            distance,
            predecessor: vec![None; num_vertices],
            status: TreeStatus::NotRun,
        }
    }

    pub(crate) fn update(&mut self, vertex: usize, distance: Weight, predecessor: usize) {
        self.distance[vertex] = Some(distance);
        self.predecessor[vertex] = Some(predecessor);
    }

    pub(crate) fn finish(&mut self) {
        self.status = TreeStatus::Valid;
    }

    /// Drops the predecessor tree. Distances are kept but no longer meaningful.
    pub(crate) fn invalidate(&mut self, cycle: NegativeCycle) {
        self.predecessor.clear();
        self.status = TreeStatus::NegativeCycle(cycle);
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distance
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessor
    }

    pub fn status(&self) -> &TreeStatus {
        &self.status
    }

    pub fn is_valid(&self) -> bool {
        self.status == TreeStatus::Valid
    }

    pub fn negative_cycle(&self) -> Option<&NegativeCycle> {
        match &self.status {
            TreeStatus::NegativeCycle(cycle) => Some(cycle),
            _ => None,
        }
    }

    /// Shortest path from the source to `target`.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if `target` is not a vertex of a
    /// valid tree, and `Error::BrokenPredecessorChain` if walking the
    /// predecessors from `target` does not end at the source.
    pub fn route(&self, target: usize) -> Result<Route, Error> {
        if !self.is_valid() {
            return Ok(Route::Unavailable);
        }

        let Some(&distance) = self.distance.get(target) else {
            return Err(Error::NodeIndexOutOfBounds(target));
        };

        let Some(weight) = distance else {
            return Ok(Route::Unreachable);
        };

        let vertices = self.reconstruct_path(target)?;
        Ok(Route::Found(ShortestPath { vertices, weight }))
    }

    /// Walks predecessors back from `target` and returns the path in
    /// source-to-target order. The walk is capped at N vertices.
    fn reconstruct_path(&self, target: usize) -> Result<Vec<usize>, Error> {
        let num_vertices = self.predecessor.len();
        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(vertex) = current {
            if path.len() == num_vertices {
                return Err(Error::BrokenPredecessorChain(target));
            }
            path.push(vertex);
            current = self.predecessor[vertex];
        }

        path.reverse();

        if path.first() != Some(&self.source) {
            return Err(Error::BrokenPredecessorChain(target));
        }
        Ok(path)
    }
}
