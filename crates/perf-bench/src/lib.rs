// ----------------------------
// Benchmark graphs
// ----------------------------

use common::types::Weight;
use shortest_path_core::AdjacencyMatrix;

pub const NUM_VERTICES: usize = 300;

/// Target vertex queried after each run.
pub const TARGET: usize = NUM_VERTICES - 1;

/// Generates a dense benchmark matrix without randomness.
///
/// Two thirds of the off-diagonal entries are edges, with weights varied by
/// position so the solvers cannot shortcut on uniform input.
///
/// With `negative` set, each weight `w(u, v)` is reweighted to
/// `w(u, v) + p(u) - p(v)` for a vertex potential `p`. Cycle sums are
/// unchanged, so the graph has negative edges but no negative cycle. Base
/// weights are odd and potentials even, so no edge becomes 0.
pub fn generate_benchmark_matrix(negative: bool) -> AdjacencyMatrix {
    let n = NUM_VERTICES;
    let rows = (0..n)
        .map(|from| {
            (0..n)
                .map(|to| edge_weight(from, to, negative))
                .collect::<Vec<Weight>>()
        })
        .collect();

    // Rows are built square above.
    AdjacencyMatrix::from_rows(rows).unwrap_or_default()
}

fn edge_weight(from: usize, to: usize, negative: bool) -> Weight {
    if from == to || (from + to) % 3 == 0 {
        return 0;
    }

    let base = 1 + 2 * ((from * 31 + to * 17) % 48) as Weight;
    if negative {
        base + potential(from) - potential(to)
    } else {
        base
    }
}

fn potential(vertex: usize) -> Weight {
    2 * ((vertex * 7) % 30) as Weight
}
