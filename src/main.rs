use anyhow::Result;
use clap::Parser;

use affil_adder::cli::{Cli, Commands};
use affil_adder::commands::{run_fetch_example, run_format};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format(args) => {
            run_format(args)?;
        }
        Commands::FetchExample(args) => {
            run_fetch_example(args)?;
        }
    }

    Ok(())
}
