//! CLI argument parsing for pathfind
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_item, parse_output_format, parse_representation};
use pathfind_core::config::Representation;
use pathfind_core::format::OutputFormat;
use pathfind_core::graph::Vertex;

/// Pathfind - weighted shortest paths over undirected graphs
#[derive(Parser, Debug)]
#[command(name = "pathfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (`trace`) or a full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file to load instead of the default location
    #[arg(long, global = true, env = "PATHFIND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two vertices
    Path {
        /// Graph file (.toml, .json, .yaml or .yml)
        graph: PathBuf,

        /// Source vertex
        from: Vertex,

        /// Target vertex
        to: Vertex,

        /// In-memory representation: map or matrix [default: from config, else map]
        #[arg(long, short, value_parser = parse_representation)]
        representation: Option<Representation>,
    },

    /// List every vertex reachable from a source with its distance and path
    Tree {
        /// Graph file (.toml, .json, .yaml or .yml)
        graph: PathBuf,

        /// Source vertex
        from: Vertex,

        /// In-memory representation: map or matrix [default: from config, else map]
        #[arg(long, short, value_parser = parse_representation)]
        representation: Option<Representation>,
    },

    /// Show vertex and edge counts for a graph file
    Info {
        /// Graph file (.toml, .json, .yaml or .yml)
        graph: PathBuf,

        /// In-memory representation: map or matrix [default: from config, else map]
        #[arg(long, short, value_parser = parse_representation)]
        representation: Option<Representation>,
    },

    /// Solve a 0/1 knapsack instance
    Knapsack {
        /// Maximum total weight
        #[arg(long, short, allow_negative_numbers = true)]
        capacity: i64,

        /// Item as WEIGHT:VALUE (repeatable)
        #[arg(long = "item", short, value_name = "WEIGHT:VALUE", value_parser = parse_item)]
        items: Vec<(i64, i64)>,

        /// Also print the indices of the chosen items
        #[arg(long)]
        select: bool,
    },
}
