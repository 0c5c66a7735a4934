//! `pathfind tree`: every vertex reachable from a source

use serde::Serialize;

use pathfind_core::error::Result;
use pathfind_core::format::{join_path, OutputFormat};
use pathfind_core::graph::{shortest_path_tree, Distance, LoadedGraph, Vertex};

use super::dispatch::CommandContext;

#[derive(Debug, Serialize)]
struct ReachedVertex {
    vertex: Vertex,
    distance: Distance,
    path: Vec<Vertex>,
}

fn reached_from(graph: &LoadedGraph, from: Vertex) -> Vec<ReachedVertex> {
    if graph.vertices_count() == 0 {
        return Vec::new();
    }
    let tree = shortest_path_tree(graph, from);
    tree.reached()
        .into_iter()
        .map(|vertex| {
            let result = tree.path_to(vertex);
            ReachedVertex {
                vertex,
                distance: result.distance,
                path: result.path,
            }
        })
        .collect()
}

pub fn execute(ctx: &CommandContext, graph: &LoadedGraph, from: Vertex) -> Result<()> {
    let reached = reached_from(graph, from);

    match ctx.format() {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Shortest paths from {} ({} reached):", from, reached.len());
            }
            for entry in &reached {
                println!(
                    "  {}  distance={}  {}",
                    entry.vertex,
                    entry.distance,
                    join_path(&entry.path, " -> ")
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "from": from,
                "reached": reached,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            println!(
                "H pathfind=1 records=1 mode=tree representation={} from={} reached={}",
                graph.representation(),
                from,
                reached.len()
            );
            for entry in &reached {
                println!(
                    "T vertex={} distance={} path={}",
                    entry.vertex,
                    entry.distance,
                    join_path(&entry.path, ",")
                );
            }
        }
    }
    Ok(())
}
