use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use super::matrix::{AdjacencyMatrix, MAX_VERTICES};
use common::error::Error;
use common::types::{Edge, Weight};

/// On-disk representation of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphFormat {
    /// One matrix row per line, whitespace-separated integer weights.
    #[default]
    Matrix,
    /// CSV with a `from,to,weight` header, one edge per record.
    EdgeList,
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matrix" => Ok(GraphFormat::Matrix),
            "edge-list" | "edgelist" | "csv" => Ok(GraphFormat::EdgeList),
            other => Err(Error::UnknownGraphFormat(other.to_string())),
        }
    }
}

// Helper struct for CSV parsing
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    weight: Weight,
}

/// Loads a graph from `path` in the given format.
pub fn load_graph(path: impl AsRef<Path>, format: GraphFormat) -> Result<AdjacencyMatrix, Error> {
    let path = path.as_ref();
    let graph = match format {
        GraphFormat::Matrix => load_matrix(path)?,
        GraphFormat::EdgeList => load_edge_list(path)?,
    };

    debug!(
        path = %path.display(),
        ?format,
        vertices = graph.num_vertices(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

pub fn load_matrix(path: impl AsRef<Path>) -> Result<AdjacencyMatrix, Error> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

/// Parses the textual adjacency-matrix format.
///
/// Blank lines are skipped. Line numbers in errors are 1-based and refer to
/// the input text.
pub fn parse_matrix(text: &str) -> Result<AdjacencyMatrix, Error> {
    let mut rows: Vec<Vec<Weight>> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<Weight>().map_err(|_| Error::InvalidWeight {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    AdjacencyMatrix::from_rows(rows)
}

pub fn load_edge_list(path: impl AsRef<Path>) -> Result<AdjacencyMatrix, Error> {
    let file = File::open(path)?;
    parse_edge_list(file)
}

/// Parses a `from,to,weight` CSV edge list.
///
/// The vertex count is the highest referenced index plus one, capped at
/// [`MAX_VERTICES`].
pub fn parse_edge_list<R: Read>(reader: R) -> Result<AdjacencyMatrix, Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut edges: Vec<Edge> = Vec::new();
    for result in rdr.deserialize() {
        let record: EdgeRecord = result.map_err(|e| Error::EdgeList(e.to_string()))?;
        edges.push((record.from, record.to, record.weight));
    }

    let num_vertices = match edges.iter().flat_map(|&(u, v, _)| [u, v]).max() {
        Some(max_id) if max_id >= MAX_VERTICES => {
            return Err(Error::TooManyVertices {
                count: max_id.saturating_add(1),
                max: MAX_VERTICES,
            });
        }
        Some(max_id) => max_id + 1,
        None => 0,
    };

    AdjacencyMatrix::from_edges(num_vertices, &edges)
}
