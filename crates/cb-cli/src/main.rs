//! Cubero CLI - OLAP-style analysis over a sales fact table

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{dice, drilldown, generate, overview, pivot, rollup, slice};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Generate(args) => generate::execute(args, &cli.global),
        cli::Commands::Overview(args) => overview::execute(args, &cli.global),
        cli::Commands::Slice(args) => slice::execute(args, &cli.global),
        cli::Commands::Dice(args) => dice::execute(args, &cli.global),
        cli::Commands::Rollup(args) => rollup::execute(args, &cli.global),
        cli::Commands::Drilldown(args) => drilldown::execute(args, &cli.global),
        cli::Commands::Pivot(args) => pivot::execute(args, &cli.global),
    }
}
