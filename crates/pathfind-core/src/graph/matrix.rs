//! Adjacency-matrix graph representation for dense or static graphs

use crate::error::{PathfindError, Result};
use crate::graph::map::Graph;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, EdgeKey, Vertex};
use crate::matrix::Matrix;

/// Cell value meaning "no edge"
pub const UNREACHABLE: Distance = Distance::MAX;

/// Square `n x n` weight table. Entry `(row, col)` is the weight of moving
/// from `row` to `col`; [`UNREACHABLE`] marks a missing edge. Diagonal
/// entries are ignored by traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    weights: Matrix<Distance>,
}

impl AdjacencyMatrix {
    /// `size` vertices, no edges. Fails if `size * size` exceeds
    /// [`MAX_CELLS`](crate::matrix::MAX_CELLS).
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            weights: Matrix::filled(size, size, UNREACHABLE)?,
        })
    }

    /// Build from explicit rows. Fails if the table is not square.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self> {
        let size = rows.len();
        let mut weights = Matrix::filled(size, size, UNREACHABLE)?;
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(PathfindError::invalid_value(
                    "adjacency matrix",
                    format!("row {} has {} columns, expected {}", index, row.len(), size),
                ));
            }
            weights.row_mut(index).copy_from_slice(&row);
        }
        Ok(Self { weights })
    }

    /// Copy a map graph into a matrix sized `max vertex + 1`
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let size = match graph.max_vertex() {
            Some(max) => size_for(max)?,
            None => 0,
        };
        let mut matrix = Self::new(size)?;
        for (u, v, weight) in graph.edges() {
            matrix.weights[(u, v)] = weight;
            matrix.weights[(v, u)] = weight;
        }
        Ok(matrix)
    }

    /// Number of vertices (rows)
    pub fn size(&self) -> usize {
        self.weights.rows()
    }

    /// Store the undirected edge `{u, v}` in both `(u, v)` and `(v, u)`.
    ///
    /// Fails if either vertex is out of range, if `weight` is the reserved
    /// [`UNREACHABLE`] value, or if the pair already holds a weight.
    pub fn set_edge(&mut self, u: Vertex, v: Vertex, weight: Distance) -> Result<()> {
        let size = self.size();
        if u >= size || v >= size {
            return Err(PathfindError::invalid_value(
                "vertex",
                format!("{} (matrix has {} vertices)", u.max(v), size),
            ));
        }
        if weight == UNREACHABLE {
            return Err(PathfindError::invalid_value("edge weight", weight));
        }
        if self.has_edge(u, v) {
            return Err(PathfindError::already_exists("edge", EdgeKey::new(u, v)));
        }

        self.weights[(u, v)] = weight;
        self.weights[(v, u)] = weight;
        Ok(())
    }

    /// Weight of moving from `u` to `v`, or `None` if there is no such edge
    pub fn weight(&self, u: Vertex, v: Vertex) -> Option<Distance> {
        self.weights
            .get(u, v)
            .copied()
            .filter(|&weight| weight != UNREACHABLE)
    }

    /// True if either direction of `{u, v}` holds a weight
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.weight(u, v).is_some() || self.weight(v, u).is_some()
    }

    /// Unordered pairs with a weight in at least one direction, diagonal excluded
    pub fn edges_count(&self) -> usize {
        let size = self.size();
        (0..size)
            .flat_map(|u| (u + 1..size).map(move |v| (u, v)))
            .filter(|&(u, v)| self.has_edge(u, v))
            .count()
    }

    /// Convert into a map graph. Only symmetric matrices describe an
    /// undirected graph. Every row becomes a vertex, with or without edges.
    pub fn to_graph(&self) -> Result<Graph> {
        let size = self.size();
        let mut graph = Graph::new();
        for u in 0..size {
            graph.add_vertex(u);
            for v in u + 1..size {
                let forward = self.weight(u, v);
                if forward != self.weight(v, u) {
                    return Err(PathfindError::invalid_value(
                        "adjacency matrix",
                        format!("asymmetric entry at {}", EdgeKey::new(u, v)),
                    ));
                }
                if let Some(weight) = forward {
                    graph.add_edge(u, v, weight)?;
                }
            }
        }
        Ok(graph)
    }
}

/// Matrix side needed to hold vertex `max`
pub fn size_for(max: Vertex) -> Result<usize> {
    max.checked_add(1)
        .ok_or_else(|| PathfindError::invalid_value("vertex", max))
}

impl GraphProvider for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn neighbors(&self, vertex: Vertex) -> Vec<(Vertex, Distance)> {
        if vertex >= self.size() {
            return Vec::new();
        }
        self.weights
            .row(vertex)
            .iter()
            .enumerate()
            .filter(|&(col, &weight)| col != vertex && weight != UNREACHABLE)
            .map(|(col, &weight)| (col, weight))
            .collect()
    }
}
