//! `pathfind info`: graph summary

use pathfind_core::error::Result;
use pathfind_core::format::OutputFormat;
use pathfind_core::graph::LoadedGraph;

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, graph: &LoadedGraph) -> Result<()> {
    let vertices = graph.vertices_count();
    let edges = graph.edges_count();
    let representation = graph.representation();

    match ctx.format() {
        OutputFormat::Human => {
            println!("Vertices: {}", vertices);
            println!("Edges: {}", edges);
            if !ctx.cli.quiet {
                println!("Representation: {}", representation);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "vertices": vertices,
                "edges": edges,
                "representation": representation,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            println!("H pathfind=1 records=1 mode=info");
            println!(
                "I vertices={} edges={} representation={}",
                vertices, edges, representation
            );
        }
    }
    Ok(())
}
