//! Pathfind - weighted shortest paths over undirected graphs
//!
//! Loads a graph file, answers shortest-path queries against it, and solves
//! small 0/1 knapsack instances.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use pathfind_core::config::Config;
use pathfind_core::error::{ExitCode as PathfindExitCode, PathfindError};
use pathfind_core::format::OutputFormat;
use pathfind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap can fail before `Cli.format` exists; honour a literal
            // `--format json` on the command line anyway.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        PathfindError::UsageError(err.to_string())
                    }
                    _ => PathfindError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = Config::resolve(cli.config.as_deref());
    let format = cli.format.unwrap_or_else(|| {
        config
            .as_ref()
            .map(|config| config.format)
            .unwrap_or_default()
    });

    let log_level = cli.log_level.clone().or_else(|| {
        config
            .as_ref()
            .ok()
            .and_then(|config| config.log_level.clone())
    });
    if let Err(e) = logging::init_tracing(cli.verbose, log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = config.and_then(|config| commands::dispatch::run(&cli, &config, start));

    match result {
        Ok(()) => ExitCode::from(PathfindExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
