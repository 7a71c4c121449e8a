// regexlab/src/main.rs
//! RegexLab entry point: parse arguments, set up logging, dispatch.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use regexlab::cli::{Cli, Commands};
use regexlab::{commands, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &cli.command {
        Commands::Test(cmd) => commands::evaluate::run(cmd),
        Commands::Share(cmd) => commands::share::run(cmd),
        Commands::Presets(cmd) => commands::presets::run(cmd),
    }
}
