use std::fmt;

use common::error::Error;
use common::types::{Edge, Weight};

/// Largest vertex count `from_edges` will allocate a matrix for.
pub const MAX_VERTICES: usize = 8192;

/// Graph stored as a dense adjacency matrix.
///
/// `weights[u * num_vertices + v]` is the weight of edge `u -> v`, with `0`
/// meaning there is no edge. The matrix is square and read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    num_vertices: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns `Error::NonSquareMatrix` if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self, Error> {
        let num_vertices = rows.len();
        let mut weights = Vec::with_capacity(num_vertices * num_vertices);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_vertices {
                return Err(Error::NonSquareMatrix {
                    row,
                    expected: num_vertices,
                    found: values.len(),
                });
            }
            weights.extend(values);
        }

        Ok(Self {
            num_vertices,
            weights,
        })
    }

    /// Builds a matrix of `num_vertices` vertices from a list of edges `(from, to, weight)`.
    ///
    /// When the same `(from, to)` pair appears more than once the last edge wins.
    ///
    /// # Errors
    /// Returns `Error::TooManyVertices` above [`MAX_VERTICES`],
    /// `Error::NodeIndexOutOfBounds` for endpoints `>= num_vertices` and
    /// `Error::ZeroWeightEdge` for edges of weight 0.
    pub fn from_edges(num_vertices: usize, edges: &[Edge]) -> Result<Self, Error> {
        let too_many = Error::TooManyVertices {
            count: num_vertices,
            max: MAX_VERTICES,
        };
        if num_vertices > MAX_VERTICES {
            return Err(too_many);
        }
        let size = num_vertices.checked_mul(num_vertices).ok_or(too_many)?;
        let mut weights = vec![0; size];

        for &(from, to, weight) in edges {
            if from >= num_vertices {
                return Err(Error::NodeIndexOutOfBounds(from));
            }
            if to >= num_vertices {
                return Err(Error::NodeIndexOutOfBounds(to));
            }
            if weight == 0 {
                return Err(Error::ZeroWeightEdge { from, to });
            }
            weights[from * num_vertices + to] = weight;
        }

        Ok(Self {
            num_vertices,
            weights,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// Raw matrix entry at `[from][to]`; `0` when there is no edge.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn weight(&self, from: usize, to: usize) -> Weight {
        self.row(from)[to]
    }

    /// The edge `from -> to`, if present.
    pub fn edge(&self, from: usize, to: usize) -> Option<Weight> {
        if from >= self.num_vertices || to >= self.num_vertices {
            return None;
        }
        Some(self.weight(from, to)).filter(|&w| w != 0)
    }

    pub fn row(&self, from: usize) -> &[Weight] {
        let start = from * self.num_vertices;
        &self.weights[start..start + self.num_vertices]
    }

    /// Outgoing edges of `from` as `(to, weight)`, in ascending `to` order.
    pub fn neighbors(&self, from: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(to, &w)| (to, w))
    }

    /// Every edge of the graph in row-major order.
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.num_vertices)
            .flat_map(|from| self.neighbors(from).map(move |(to, w)| (from, to, w)))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }

    pub fn has_negative_weights(&self) -> bool {
        self.weights.iter().any(|&w| w < 0)
    }
}

/// Renders the matrix in the text format read by `loader::parse_matrix`.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for from in 0..self.num_vertices {
            let row = self.row(from);
            for (i, w) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
