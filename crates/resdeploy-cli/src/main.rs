//! Resdeploy CLI - Command-line utility for deploying bundled resources.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Copy(args) => commands::copy::execute(args, &*formatter),
        cli::Commands::Write(args) => commands::write::execute(args, &*formatter),
    }
}

/// Library log records go to stderr. `RUST_LOG` overrides the flag-derived
/// level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
