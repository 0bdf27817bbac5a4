use std::fs;
use std::io::Write;
use tracing::{info, warn};

use super::args::{GenerateArgs, SolveArgs};
use super::config::{GeneratorConfig, SolverConfig, WeightType};
use super::error::Error;
use super::generator::GraphGenerator;
use super::report::Report;
use shortest_path_core::{
    AdjacencyMatrix, BellmanFordSolver, DijkstraSolver, ShortestPathSolver, loader,
};

/// Builds the solver selected by `weight_type`.
pub fn build_solver(
    weight_type: WeightType,
    graph: AdjacencyMatrix,
    source: usize,
) -> Box<dyn ShortestPathSolver> {
    match weight_type {
        WeightType::Positive => Box::new(DijkstraSolver::with_source(graph, source)),
        WeightType::Negative => Box::new(BellmanFordSolver::with_source(graph, source)),
    }
}

/// Loads the graph, runs the selected solver and writes the report to `out`.
pub fn solve(args: SolveArgs, defaults: &SolverConfig, out: &mut impl Write) -> Result<(), Error> {
    let weight_type = args.weight_type.unwrap_or(defaults.weight_type);
    let format = args.format.unwrap_or(defaults.format);
    let source = args.source.unwrap_or(defaults.source);

    let graph = loader::load_graph(&args.path, format)?;
    if weight_type == WeightType::Positive && graph.has_negative_weights() {
        warn!(
            path = %args.path.display(),
            "graph has negative weights; positive-weight results may not be shortest"
        );
    }

    info!(
        ?weight_type,
        source,
        target_vertex = args.dst,
        vertices = graph.num_vertices(),
        "solving"
    );

    let mut solver = build_solver(weight_type, graph, source);
    solver.run()?;

    let report = Report::from_solver(solver.as_ref(), args.dst)?;
    report.log();
    write!(out, "{}", report)?;
    Ok(())
}

/// Generates a random matrix and writes it to `args.output`, or to `out`.
pub fn generate(
    args: GenerateArgs,
    defaults: GeneratorConfig,
    out: &mut impl Write,
) -> Result<(), Error> {
    let settings = GeneratorConfig {
        vertices: args.vertices.unwrap_or(defaults.vertices),
        density: args.density.unwrap_or(defaults.density),
        min_weight: args.min_weight.unwrap_or(defaults.min_weight),
        max_weight: args.max_weight.unwrap_or(defaults.max_weight),
    };

    let graph = GraphGenerator::new(settings, args.seed)?.generate()?;

    match args.output {
        Some(path) => {
            fs::write(&path, graph.to_string())?;
            info!(
                path = %path.display(),
                vertices = graph.num_vertices(),
                edges = graph.edge_count(),
                "graph written"
            );
        }
        None => write!(out, "{}", graph)?,
    }
    Ok(())
}
