//! `pathfind path`: shortest path between two vertices

use pathfind_core::error::Result;
use pathfind_core::format::{join_path, path_record, OutputFormat};
use pathfind_core::graph::{find_shortest_path, LoadedGraph, PathResult, Vertex};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, graph: &LoadedGraph, from: Vertex, to: Vertex) -> Result<()> {
    let result = find_shortest_path(graph, from, to);

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, from, to, &result),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(from, to, &result))?)
        }
        OutputFormat::Records => {
            println!(
                "H pathfind=1 records=1 mode=path representation={}",
                graph.representation()
            );
            println!("{}", path_record(from, to, &result));
        }
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, from: Vertex, to: Vertex, result: &PathResult) {
    if !result.is_reachable() {
        if !ctx.cli.quiet {
            println!("No path from {} to {}", from, to);
        }
        return;
    }
    println!("{}", join_path(&result.path, " -> "));
    if !ctx.cli.quiet {
        println!("Distance: {} ({} hops)", result.distance, result.hops());
    }
}

fn to_json(from: Vertex, to: Vertex, result: &PathResult) -> serde_json::Value {
    serde_json::json!({
        "from": from,
        "to": to,
        "reachable": result.is_reachable(),
        "distance": result.distance,
        "hops": result.hops(),
        "path": result.path,
    })
}
