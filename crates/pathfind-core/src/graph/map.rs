//! Adjacency-map graph representation

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PathfindError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, EdgeKey, Vertex};

/// Undirected weighted graph keyed by vertex identifier.
///
/// Vertices are registered by the edges that touch them, or on their own with
/// [`Graph::add_vertex`]. Each
/// unordered vertex pair holds at most one weight: inserting a second edge
/// between the same pair fails and leaves the graph untouched.
///
/// All ordered collections iterate in ascending vertex order, which is the
/// order the solver relaxes neighbours in.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: BTreeSet<Vertex>,
    edges: BTreeMap<EdgeKey, Distance>,
    adjacency: BTreeMap<Vertex, BTreeSet<Vertex>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(u, v, weight)` triples, failing on the first
    /// duplicate pair.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, Distance)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Fails with [`PathfindError::AlreadyExists`] if the pair is already
    /// present; the graph is not modified in that case.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: Distance) -> Result<()> {
        let key = EdgeKey::new(u, v);
        if self.edges.contains_key(&key) {
            return Err(PathfindError::already_exists("edge", key));
        }

        self.vertices.insert(u);
        self.vertices.insert(v);
        self.edges.insert(key, weight);
        self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);

        tracing::trace!(u, v, weight, "add_edge");
        Ok(())
    }

    /// Register `vertex` without any edges. Returns false if it was known.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        self.vertices.insert(vertex)
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// Weight of the edge `{u, v}`, or [`PathfindError::NotFound`]
    pub fn distance(&self, u: Vertex, v: Vertex) -> Result<Distance> {
        let key = EdgeKey::new(u, v);
        self.edges
            .get(&key)
            .copied()
            .ok_or_else(|| PathfindError::not_found("edge", key))
    }

    /// Vertices directly connected to `vertex`, ascending
    pub fn adjacent_vertices(&self, vertex: Vertex) -> Vec<Vertex> {
        self.adjacency
            .get(&vertex)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// All vertices, ascending
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// All edges as `(low, high, weight)`, ascending by `(low, high)`
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Distance)> + '_ {
        self.edges
            .iter()
            .map(|(key, &weight)| (key.low(), key.high(), weight))
    }

    pub fn vertices_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Largest vertex identifier, if any
    pub fn max_vertex(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        self.vertices_count()
    }

    fn neighbors(&self, vertex: Vertex) -> Vec<(Vertex, Distance)> {
        let Some(adjacent) = self.adjacency.get(&vertex) else {
            return Vec::new();
        };
        adjacent
            .iter()
            .filter_map(|&other| {
                self.edges
                    .get(&EdgeKey::new(vertex, other))
                    .map(|&weight| (other, weight))
            })
            .collect()
    }
}
