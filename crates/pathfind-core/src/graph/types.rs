use serde::Serialize;

/// Vertex identifier. Vertices carry no attributes beyond identity.
pub type Vertex = usize;

/// Non-negative edge weight and accumulated path length
pub type Distance = u64;

/// Larger than any real path sum; never returned to callers
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// Unordered vertex pair, stored as `(min, max)` so `(u, v)` and `(v, u)`
/// hash and compare equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(Vertex, Vertex);

impl EdgeKey {
    pub fn new(a: Vertex, b: Vertex) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    pub fn low(&self) -> Vertex {
        self.0
    }

    pub fn high(&self) -> Vertex {
        self.1
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Result of a shortest-path query
///
/// An empty `path` means the target is unreachable (or the graph is empty);
/// `distance` is 0 in that case rather than a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PathResult {
    pub path: Vec<Vertex>,
    pub distance: Distance,
}

impl PathResult {
    pub fn new(path: Vec<Vertex>, distance: Distance) -> Self {
        Self { path, distance }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Path consisting of only `vertex`, at distance 0
    pub fn trivial(vertex: Vertex) -> Self {
        Self {
            path: vec![vertex],
            distance: 0,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn into_parts(self) -> (Vec<Vertex>, Distance) {
        (self.path, self.distance)
    }
}
