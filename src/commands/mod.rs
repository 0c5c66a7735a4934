//! Command implementations for pathfind

pub mod dispatch;
pub mod info;
pub mod knapsack;
pub mod path;
pub mod tree;
