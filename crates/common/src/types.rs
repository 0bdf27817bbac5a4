/// Edge weight as stored in the adjacency matrix. `0` means "no edge".
pub type Weight = i64;

/// Type alias for a single edge: (from, to, weight)
pub type Edge = (usize, usize, Weight);

/// Path returned by the placeholder queries when no path can be reported.
pub const PLACEHOLDER_PATH: [usize; 1] = [0];

/// Weight returned by the placeholder queries when no path can be reported.
pub const PLACEHOLDER_WEIGHT: Weight = 0;

/// A shortest path from the source to some target.
///
/// `vertices` starts at the source and ends at the target; `weight` is the
/// sum of the edge weights along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub vertices: Vec<usize>,
    pub weight: Weight,
}

impl ShortestPath {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Outcome of a single shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Found(ShortestPath),
    /// The target has no inbound path from the source.
    Unreachable,
    /// No valid shortest-path tree exists: the solver has not run, or a
    /// negative cycle is reachable from the source.
    Unavailable,
}

impl Route {
    pub fn found(&self) -> Option<&ShortestPath> {
        match self {
            Route::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Collapses the route into the placeholder path, `[0]` unless found.
    pub fn into_path(self) -> Vec<usize> {
        match self {
            Route::Found(path) => path.vertices,
            _ => PLACEHOLDER_PATH.to_vec(),
        }
    }

    /// Collapses the route into the placeholder weight, `0` unless found.
    pub fn weight(&self) -> Weight {
        self.found().map_or(PLACEHOLDER_WEIGHT, |path| path.weight)
    }
}

/// A negative cycle reachable from the source.
///
/// Fields:
/// - `vertices`: the cycle in forward order, without repeating the first vertex.
/// - `total_weight`: sum of the edge weights around the cycle (always negative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    pub vertices: Vec<usize>,
    pub total_weight: Weight,
}

impl NegativeCycle {
    pub fn is_negative(&self) -> bool {
        self.total_weight < 0
    }
}
