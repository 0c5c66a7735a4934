//! Graph representations and shortest-path search
//!
//! - `map`: Adjacency-map graph (sparse, grows one edge at a time)
//! - `matrix`: Adjacency-matrix graph (dense or static)
//! - `traversal`: The `GraphProvider` trait the solver reads through
//! - `algos`: Dijkstra shortest paths
//! - `load`: Graph documents in TOML, JSON or YAML

pub mod algos;
pub mod load;
pub mod map;
pub mod matrix;
pub mod traversal;
pub mod types;

pub use algos::{find_shortest_path, shortest_path_tree, ShortestPathTree};
pub use load::{FileFormat, GraphFile, LoadedGraph};
pub use map::Graph;
pub use matrix::{AdjacencyMatrix, UNREACHABLE};
pub use traversal::GraphProvider;
pub use types::{Distance, EdgeKey, PathResult, Vertex, INFINITE_DISTANCE};
