//! Pathfind Core Library
//!
//! Weighted shortest paths over undirected graphs, plus the 0/1 knapsack and
//! matrix utilities that sit beside them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod knapsack;
pub mod logging;
pub mod matrix;
