//! Command dispatch logic for pathfind

use std::time::Instant;

use crate::cli::Cli;
use pathfind_core::config::Config;
use pathfind_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
