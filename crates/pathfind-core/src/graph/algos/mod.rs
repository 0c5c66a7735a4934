//! Graph algorithm implementations
//!
//! - `dijkstra`: Weighted single-source shortest paths

pub mod dijkstra;

pub use dijkstra::{
    find_shortest_path, shortest_path_tree, HeapEntry, ShortestPathTree, TraversalRecord,
};
