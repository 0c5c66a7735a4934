//! Routing from parsed subcommands to their implementations

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{info, knapsack, path, tree};
use pathfind_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Path {
                graph,
                from,
                to,
                representation,
            } => {
                let graph = ctx.load_graph(graph, *representation)?;
                path::execute(ctx, &graph, *from, *to)
            }
            Commands::Tree {
                graph,
                from,
                representation,
            } => {
                let graph = ctx.load_graph(graph, *representation)?;
                tree::execute(ctx, &graph, *from)
            }
            Commands::Info {
                graph,
                representation,
            } => {
                let graph = ctx.load_graph(graph, *representation)?;
                info::execute(ctx, &graph)
            }
            Commands::Knapsack {
                capacity,
                items,
                select,
            } => knapsack::execute(ctx, items, *capacity, *select),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
