//! Rulegen CLI - rule model generator
//!
//! Usage: rulegen <COMMAND>
//!
//! Commands:
//!   generate  Compile rule sources and materialize the model into the build tree

use anyhow::Result;
use clap::Parser;

use rulegen::presentation::{Cli, Commands};

mod commands;
mod logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json)?;

    match &cli.command {
        Commands::Generate(args) => commands::generate::cmd_generate(args, cli.json),
    }
}
