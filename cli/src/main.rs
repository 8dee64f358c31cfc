use anyhow::Result;
use clap::{Parser, Subcommand};

mod command;
mod config;
mod util;

use command::*;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Log each table as it is processed.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one C# model class per table.
    Generate(Generate),
    /// Print the tables and columns that would be generated.
    Info(Info),
}

fn main() -> Result<()> {
    use Command::*;
    let cli = Cli::parse();
    util::init_tracing(cli.verbose);
    match cli.command {
        Generate(generate) => generate.run(),
        Info(info) => info.run(),
    }
}
