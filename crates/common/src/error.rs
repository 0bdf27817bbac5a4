use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Indicates an attempt to access a node index that exceeds the graph size (N).
    #[error("Node index {0} is out of bounds.")]
    NodeIndexOutOfBounds(usize),

    /// A matrix row does not have as many entries as the matrix has rows.
    #[error("Matrix row {row} has {found} entries, expected {expected}.")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token in the matrix text could not be read as an integer weight.
    #[error("Invalid weight {token:?} on line {line}.")]
    InvalidWeight { line: usize, token: String },

    /// Zero encodes "no edge" and cannot be used as an explicit edge weight.
    #[error("Edge {from} -> {to} has weight 0, which encodes a missing edge.")]
    ZeroWeightEdge { from: usize, to: usize },

    #[error("Edge list error: {0}")]
    EdgeList(String),

    #[error("Unknown graph format {0:?}; expected \"matrix\" or \"edge-list\".")]
    UnknownGraphFormat(String),

    /// The graph would need more vertices than a dense matrix can hold.
    #[error("Graph needs {count} vertices, more than the supported maximum of {max}.")]
    TooManyVertices { count: usize, max: usize },

    /// A tentative distance left the range of `Weight`.
    #[error("Distance overflowed while relaxing edge {from} -> {to}.")]
    WeightOverflow { from: usize, to: usize },

    /// Walking predecessors from a vertex did not reach the source within N steps.
    #[error("Predecessor chain starting at vertex {0} does not reach the source.")]
    BrokenPredecessorChain(usize),

    /// Failed to trace the full cycle path, usually due to broken predecessor chains.
    #[error("Cycle path reconstruction failed due to broken predecessor chain.")]
    CycleReconstructionFailed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
