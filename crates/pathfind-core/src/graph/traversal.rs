use crate::graph::types::{Distance, Vertex};

/// Trait for providing adjacency and edge weights to the solver
///
/// Implementations must return neighbours in ascending vertex order so that
/// relaxation order, and therefore tie-breaking between equal-cost paths, is
/// deterministic.
pub trait GraphProvider {
    /// Number of vertices known to the graph
    fn vertex_count(&self) -> usize;

    /// Neighbours of `vertex` paired with the weight of the connecting edge.
    /// Unknown vertices have no neighbours.
    fn neighbors(&self, vertex: Vertex) -> Vec<(Vertex, Distance)>;

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

impl<P: GraphProvider + ?Sized> GraphProvider for &P {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn neighbors(&self, vertex: Vertex) -> Vec<(Vertex, Distance)> {
        (**self).neighbors(vertex)
    }
}
