use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_path_core::{BellmanFordSolver, ShortestPathSolver};

const RUNS: usize = 3;

fn main() {
    let graph = generate_benchmark_matrix(true);
    let edges = graph.edge_count();
    let mut solver = BellmanFordSolver::new(graph);

    let start_time = Instant::now();
    let mut checksum: i64 = 0;

    // Every run does exactly N - 1 passes over all edges.
    for _ in 0..RUNS {
        if let Err(e) = solver.run() {
            eprintln!("Bellman-Ford run failed: {}", e);
            return;
        }
        checksum += solver.shortest_weight(TARGET).unwrap_or_default();
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!(
        "--- Bellman-Ford Benchmark Results ({} vertices, {} edges, {} runs) ---",
        NUM_VERTICES, edges, RUNS
    );
    println!("Checksum: {}", final_checksum);
    println!("Valid Tree: {}", solver.is_valid());
    println!("Elapsed Time: {:?}", elapsed_time);
    println!("Per Run: {:?}", elapsed_time / RUNS as u32);
}
