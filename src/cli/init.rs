//! Init command implementation.
//!
//! Scaffolds a `dtx.yaml` manifest and a small sample token document to
//! start a project from.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{DtxError, Result};
use crate::output::Printer;
use crate::source::MANIFEST_FILE;

const SAMPLE_MANIFEST: &str = "tokens: tokens.json\noutput: dist\n";

const SAMPLE_DOCUMENT: &str = r#"{
	"groups": [
		{"id": "g-color", "name": "Color", "isRoot": true},
		{"id": "g-brand", "name": "Brand", "parentId": "g-color"},
		{"id": "g-dimension", "name": "Dimension", "isRoot": true}
	],
	"tokens": [
		{
			"id": "t-primary",
			"name": "Primary",
			"tokenType": "color",
			"parentGroupId": "g-brand",
			"value": {"color": {"r": 26, "g": 43, "b": 60}, "opacity": {"measure": 1}}
		},
		{
			"id": "t-font-size-large",
			"name": "Font Size Large",
			"tokenType": "dimension",
			"parentGroupId": "g-dimension",
			"value": {"measure": 16}
		}
	],
	"themes": []
}
"#;

/// Initialize a dtx project (generates dtx.yaml and a sample document)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let printer = Printer::new();

    let manifest_path = args.path.join(MANIFEST_FILE);
    let tokens_path = args.path.join("tokens.json");

    if manifest_path.exists() && !args.force {
        return Err(DtxError::Export {
            message: format!("{} already exists", MANIFEST_FILE),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, SAMPLE_MANIFEST).map_err(|e| DtxError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    printer.status("Creating", &manifest_path.display().to_string());

    if !tokens_path.exists() || args.force {
        fs::write(&tokens_path, SAMPLE_DOCUMENT).map_err(|e| DtxError::Io {
            path: tokens_path.clone(),
            message: format!("Failed to write sample document: {}", e),
        })?;
        printer.status("Creating", &tokens_path.display().to_string());
    }

    printer.status("Finished", "run `dtx export` to generate artifacts");
    Ok(())
}
