use clap::Parser;
use dtx::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => dtx::cli::export::run(args)?,
        Commands::Validate(args) => dtx::cli::validate::run(args)?,
        Commands::Init(args) => dtx::cli::init::run(args)?,
    }

    Ok(())
}
