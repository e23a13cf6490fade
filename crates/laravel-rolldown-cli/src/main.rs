//! Dev-server host for the Laravel Rolldown bridge.
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! the `dev` and `config` commands.

use clap::Parser;
use laravel_rolldown_cli::{cli, commands, logger};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Dev(dev_args) => commands::dev_execute(dev_args).await?,
        cli::Command::Config(config_args) => commands::config_execute(config_args)?,
    }

    Ok(())
}
