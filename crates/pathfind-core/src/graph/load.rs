//! Graph documents
//!
//! A graph file holds either an edge list or a square weight matrix:
//!
//! ```toml
//! [[edges]]
//! from = 0
//! to = 1
//! weight = 2
//! ```
//!
//! ```json
//! { "matrix": [[0, 2, -1], [2, 0, 1], [-1, 1, 0]] }
//! ```
//!
//! Numbers are read as signed integers so negative weights are reported as
//! invalid input rather than parse failures. In a matrix, `-1` marks a
//! missing edge.
//!
//! An edge list built as a matrix is sized by its largest vertex id, so ids
//! that would need more than [`MAX_CELLS`](crate::matrix::MAX_CELLS) cells are rejected up front.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bail_invalid;
use crate::bail_unsupported;
use crate::config::Representation;
use crate::error::{PathfindError, Result};
use crate::graph::map::Graph;
use crate::graph::matrix::{size_for, AdjacencyMatrix, UNREACHABLE};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, Vertex};

/// Matrix cell value meaning "no edge"
pub const NO_EDGE_CELL: i64 = -1;

/// Document syntax, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            _ => bail_unsupported!("graph file extension", extension, "toml, json, yaml, yml"),
        }
    }
}

/// One `{from, to, weight}` entry of an edge list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: i64,
}

/// Parsed graph document, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default)]
    pub edges: Option<Vec<EdgeSpec>>,
    #[serde(default)]
    pub matrix: Option<Vec<Vec<i64>>>,
}

fn checked_weight(weight: i64) -> Result<Distance> {
    if weight < 0 {
        bail_invalid!("edge weight", weight);
    }
    Ok(weight as Distance)
}

fn checked_cell(cell: i64) -> Result<Distance> {
    match cell {
        NO_EDGE_CELL => Ok(UNREACHABLE),
        c if c < 0 => bail_invalid!("matrix cell", c),
        c => Ok(c as Distance),
    }
}

impl GraphFile {
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let file = match format {
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(file)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read graph", path.display(), e))?;
        Self::parse(&content, format)
    }

    /// Build the requested representation, validating every weight
    pub fn build(self, representation: Representation) -> Result<LoadedGraph> {
        match representation {
            Representation::Map => self.into_graph().map(LoadedGraph::Map),
            Representation::Matrix => self.into_matrix().map(LoadedGraph::Matrix),
        }
    }

    pub fn into_graph(self) -> Result<Graph> {
        match (self.edges, self.matrix) {
            (Some(edges), None) => {
                let mut graph = Graph::new();
                for edge in edges {
                    graph.add_edge(edge.from, edge.to, checked_weight(edge.weight)?)?;
                }
                Ok(graph)
            }
            (None, Some(rows)) => matrix_from_rows(rows)?.to_graph(),
            _ => bail_invalid!("graph file", "expected exactly one of `edges` or `matrix`"),
        }
    }

    pub fn into_matrix(self) -> Result<AdjacencyMatrix> {
        match (self.edges, self.matrix) {
            (Some(edges), None) => {
                let size = match edges.iter().map(|edge| edge.from.max(edge.to)).max() {
                    Some(max) => size_for(max)?,
                    None => 0,
                };
                let mut matrix = AdjacencyMatrix::new(size)?;
                for edge in edges {
                    matrix.set_edge(edge.from, edge.to, checked_weight(edge.weight)?)?;
                }
                Ok(matrix)
            }
            (None, Some(rows)) => matrix_from_rows(rows),
            _ => bail_invalid!("graph file", "expected exactly one of `edges` or `matrix`"),
        }
    }
}

fn matrix_from_rows(rows: Vec<Vec<i64>>) -> Result<AdjacencyMatrix> {
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(checked_cell).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    AdjacencyMatrix::from_rows(rows)
}

/// A graph in whichever representation was requested
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Map(Graph),
    Matrix(AdjacencyMatrix),
}

impl LoadedGraph {
    /// Read and build a graph file in one step
    pub fn load(path: &Path, representation: Representation) -> Result<Self> {
        let start = std::time::Instant::now();
        let graph = GraphFile::read(path)?.build(representation)?;
        crate::trace_time!(
            start,
            "load_graph",
            vertices = graph.vertices_count(),
            edges = graph.edges_count()
        );
        Ok(graph)
    }

    pub fn representation(&self) -> Representation {
        match self {
            LoadedGraph::Map(_) => Representation::Map,
            LoadedGraph::Matrix(_) => Representation::Matrix,
        }
    }

    pub fn vertices_count(&self) -> usize {
        match self {
            LoadedGraph::Map(graph) => graph.vertices_count(),
            LoadedGraph::Matrix(matrix) => matrix.size(),
        }
    }

    pub fn edges_count(&self) -> usize {
        match self {
            LoadedGraph::Map(graph) => graph.edges_count(),
            LoadedGraph::Matrix(matrix) => matrix.edges_count(),
        }
    }
}

impl GraphProvider for LoadedGraph {
    fn vertex_count(&self) -> usize {
        self.vertices_count()
    }

    fn neighbors(&self, vertex: Vertex) -> Vec<(Vertex, Distance)> {
        match self {
            LoadedGraph::Map(graph) => graph.neighbors(vertex),
            LoadedGraph::Matrix(matrix) => matrix.neighbors(vertex),
        }
    }
}
