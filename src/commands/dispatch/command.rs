//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use pathfind_core::config::{Config, Representation};
use pathfind_core::error::Result;
use pathfind_core::format::OutputFormat;
use pathfind_core::graph::LoadedGraph;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` if given, otherwise the configured default
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    /// `--representation` if given, otherwise the configured default
    pub fn representation(&self, flag: Option<Representation>) -> Representation {
        flag.unwrap_or(self.config.representation)
    }

    pub fn load_graph(&self, path: &Path, flag: Option<Representation>) -> Result<LoadedGraph> {
        let graph = LoadedGraph::load(path, self.representation(flag))?;
        trace_command!(self.cli, self.start, "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathfind {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted shortest paths over undirected graphs.");
        println!();
        println!("Run `pathfind --help` for usage information.");
        Ok(())
    }
}
