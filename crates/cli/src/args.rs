use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::config::WeightType;
use common::types::Weight;
use shortest_path_core::loader::GraphFormat;

#[derive(Debug, Parser)]
#[command(
    name = "shortest-path",
    version,
    about = "Single-source shortest paths over a dense adjacency matrix",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Configuration file (defaults to ./Config.toml when present)
    #[arg(long, global = true, env = "SHORTEST_PATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level or filter directive, e.g. `trace` or `shortest_path_core=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Solve arguments used when no subcommand is given
    #[command(flatten)]
    pub solve: SolveArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run; a bare argument line means `solve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Solve(self.solve))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the shortest path from the source to one target vertex
    Solve(SolveArgs),
    /// Write a random adjacency matrix
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Path of the graph file
    #[arg(long, default_value = "graph0.txt")]
    pub path: PathBuf,

    /// Which algorithm to use
    #[arg(long, value_enum, alias = "weight_type")]
    pub weight_type: Option<WeightType>,

    /// Target vertex
    #[arg(long, default_value_t = 9)]
    pub dst: usize,

    /// Source vertex
    #[arg(long)]
    pub source: Option<usize>,

    /// Graph file format: `matrix` or `edge-list`
    #[arg(long)]
    pub format: Option<GraphFormat>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of vertices
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Probability that an off-diagonal entry is an edge
    #[arg(long)]
    pub density: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub min_weight: Option<Weight>,

    #[arg(long, allow_negative_numbers = true)]
    pub max_weight: Option<Weight>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
