//! Integration tests for the pathfind binary

mod config;
mod errors;
mod info;
mod knapsack;
mod misc;
mod support;
mod tree;
