pub mod export;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

/// dtx - Design token export pipeline
#[derive(Parser, Debug)]
#[command(name = "dtx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a token document to platform resource files
    Export(export::ExportArgs),

    /// Validate a token document without writing anything
    Validate(validate::ValidateArgs),

    /// Initialize a dtx project (generates dtx.yaml and a sample document)
    Init(init::InitArgs),
}
