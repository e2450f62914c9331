//! Validate command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{DtxError, Result};
use crate::output::plural;
use crate::source::{Manifest, TokenDocument};
use crate::validation::{print_diagnostics, validate_document};

/// Validate a token document without writing anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Token document to validate (overrides the manifest)
    #[arg(long, short)]
    pub tokens: Option<PathBuf>,

    /// Manifest file (default: dtx.yaml in the working directory)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let manifest = match &args.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::load_or_default(Path::new("."))?,
    };
    let tokens_path = args.tokens.unwrap_or(manifest.tokens);

    let document = TokenDocument::load(&tokens_path)?;
    let result = validate_document(&document);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(DtxError::Export {
            message: format!(
                "document has {}",
                plural(result.error_count(), "validation error", "validation errors")
            ),
            help: None,
        });
    }

    Ok(())
}
