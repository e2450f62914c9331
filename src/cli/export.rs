//! Export command implementation.
//!
//! Loads the token document, runs every platform generator, and writes the
//! resulting artifacts under the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{DtxError, Result};
use crate::output::{plural, Printer};
use crate::render::{generate_all, Artifact};
use crate::source::{Manifest, TokenDocument};
use crate::validation::validate_document;

/// Export a token document to platform resource files
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Token document to export (overrides the manifest)
    #[arg(long, short)]
    pub tokens: Option<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Theme whose overrides apply (the document's first theme if unset)
    #[arg(long)]
    pub theme: Option<String>,

    /// Manifest file (default: dtx.yaml in the working directory)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let printer = Printer::new();

    let manifest = match &args.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::load_or_default(Path::new("."))?,
    };

    // CLI flags override manifest values.
    let tokens_path = args.tokens.unwrap_or(manifest.tokens);
    let output_root = args.output.unwrap_or(manifest.output);
    let theme = args.theme.or(manifest.theme);

    let document = TokenDocument::load(&tokens_path)?;
    let overrides = document.theme_overrides(theme.as_deref())?;

    // Advisory pass; generation isolates failing tokens on its own.
    for diagnostic in validate_document(&document).iter() {
        printer.warning("Document", &diagnostic.to_string());
    }

    let outcome = generate_all(&document.tokens, &document.groups, &overrides);

    for artifact in &outcome.artifacts {
        write_artifact(&output_root, artifact)?;
        printer.status(
            "Exporting",
            &artifact.relative_path().display().to_string(),
        );
    }

    for failure in &outcome.failures {
        printer.error(
            "Skipped",
            &format!("{} ({}): {}", failure.token_id, failure.kind, failure.error),
        );
    }

    if outcome.has_failures() {
        return Err(DtxError::Export {
            message: format!(
                "export finished with {}",
                plural(outcome.failures.len(), "token failure", "token failures")
            ),
            help: Some("Fix the reported tokens and re-run".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(outcome.artifacts.len(), "artifact", "artifacts"),
            output_root.display()
        ),
    );

    Ok(())
}

/// Write one artifact under the output root, creating directories as needed.
fn write_artifact(root: &Path, artifact: &Artifact) -> Result<()> {
    let path = root.join(artifact.relative_path());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DtxError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(&path, &artifact.contents).map_err(|e| DtxError::Io {
        path: path.clone(),
        message: format!("Failed to write artifact: {}", e),
    })?;

    Ok(())
}
