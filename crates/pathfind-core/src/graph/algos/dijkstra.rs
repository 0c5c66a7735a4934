use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, PathResult, Vertex, INFINITE_DISTANCE};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Frontier entry. Ordered by distance, then vertex, so pops among equal
/// distances are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub distance: Distance,
    pub vertex: Vertex,
}

/// Best known distance from the source and the predecessor on that path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalRecord {
    pub distance: Distance,
    pub predecessor: Option<Vertex>,
}

impl Default for TraversalRecord {
    fn default() -> Self {
        Self {
            distance: INFINITE_DISTANCE,
            predecessor: None,
        }
    }
}

/// State tracked during one Dijkstra run. Never shared between queries.
struct DijkstraState {
    records: HashMap<Vertex, TraversalRecord>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pops: usize,
    stale: usize,
    improvements: usize,
}

impl DijkstraState {
    fn new(source: Vertex) -> Self {
        let mut records = HashMap::new();
        records.insert(
            source,
            TraversalRecord {
                distance: 0,
                predecessor: None,
            },
        );
        Self {
            records,
            heap: BinaryHeap::new(),
            pops: 0,
            stale: 0,
            improvements: 0,
        }
    }

    fn distance_of(&self, vertex: Vertex) -> Distance {
        self.records
            .get(&vertex)
            .map_or(INFINITE_DISTANCE, |record| record.distance)
    }

    /// Relax every edge leaving `vertex`. A neighbour is updated and pushed
    /// only when the candidate distance is strictly smaller, so among equal
    /// costs the first path found is kept.
    fn relax_from<P: GraphProvider + ?Sized>(&mut self, graph: &P, vertex: Vertex) {
        let base = self.distance_of(vertex);
        for (neighbor, weight) in graph.neighbors(vertex) {
            let candidate = base.saturating_add(weight);
            let record = self.records.entry(neighbor).or_default();
            if candidate >= record.distance {
                continue;
            }

            record.distance = candidate;
            record.predecessor = Some(vertex);
            self.improvements += 1;
            tracing::trace!(from = vertex, to = neighbor, distance = candidate, "relax");

            self.heap.push(Reverse(HeapEntry {
                distance: candidate,
                vertex: neighbor,
            }));
        }
    }
}

/// Distances and predecessors for every vertex reachable from one source
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: Vertex,
    records: HashMap<Vertex, TraversalRecord>,
}

impl ShortestPathTree {
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Final distance to `vertex`, or `None` if it was never reached
    pub fn distance_to(&self, vertex: Vertex) -> Option<Distance> {
        self.records
            .get(&vertex)
            .map(|record| record.distance)
            .filter(|&distance| distance != INFINITE_DISTANCE)
    }

    /// Reached vertices (source included), ascending
    pub fn reached(&self) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = self
            .records
            .iter()
            .filter(|(_, record)| record.distance != INFINITE_DISTANCE)
            .map(|(&vertex, _)| vertex)
            .collect();
        vertices.sort_unstable();
        vertices
    }

    /// Walk predecessors from `target` back to the source.
    ///
    /// A target other than the source with no predecessor is unreachable and
    /// yields an empty path at distance 0.
    pub fn path_to(&self, target: Vertex) -> PathResult {
        if target == self.source {
            return PathResult::trivial(target);
        }

        let Some(record) = self.records.get(&target) else {
            return PathResult::unreachable();
        };
        if record.predecessor.is_none() {
            return PathResult::unreachable();
        }

        let mut path = vec![target];
        let mut current = record.predecessor;
        while let Some(vertex) = current {
            path.push(vertex);
            current = self
                .records
                .get(&vertex)
                .and_then(|record| record.predecessor);
            debug_assert!(path.len() <= self.records.len(), "predecessor cycle");
        }
        path.reverse();

        PathResult::new(path, record.distance)
    }
}

/// Run Dijkstra from `source` until the frontier is empty.
///
/// Decrease-key is done lazily: an improved vertex is pushed again and the
/// outdated heap entry is skipped when popped. The frontier is always fully
/// drained so every reachable vertex ends with its final distance.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_path_tree<P: GraphProvider + ?Sized>(graph: &P, source: Vertex) -> ShortestPathTree {
    let mut state = DijkstraState::new(source);
    state.relax_from(graph, source);

    while let Some(Reverse(HeapEntry { distance, vertex })) = state.heap.pop() {
        state.pops += 1;
        if distance != state.distance_of(vertex) {
            state.stale += 1;
            continue;
        }
        state.relax_from(graph, vertex);
    }

    tracing::debug!(
        reached = state.records.len(),
        pops = state.pops,
        stale = state.stale,
        improvements = state.improvements,
        "frontier_drained"
    );

    ShortestPathTree {
        source,
        records: state.records,
    }
}

/// Minimum-weight path from `source` to `target`.
///
/// - empty graph: empty path, distance 0
/// - `source == target`: `[source]`, distance 0, whether or not the vertex exists
/// - unreachable or unknown target: empty path, distance 0
#[tracing::instrument(level = "debug", skip(graph))]
pub fn find_shortest_path<P: GraphProvider + ?Sized>(
    graph: &P,
    source: Vertex,
    target: Vertex,
) -> PathResult {
    if graph.is_empty() {
        return PathResult::unreachable();
    }
    if source == target {
        return PathResult::trivial(source);
    }

    let result = shortest_path_tree(graph, source).path_to(target);
    tracing::debug!(
        reachable = result.is_reachable(),
        distance = result.distance,
        hops = result.hops(),
        "shortest_path"
    );
    result
}
