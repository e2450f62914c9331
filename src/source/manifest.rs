//! Project manifest (dtx.yaml) parsing.
//!
//! The manifest names the token document, the output directory, and the
//! theme to export. It is loaded explicitly by the CLI and threaded down as
//! a value; CLI flags override individual fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DtxError, Result};

/// Default manifest file name looked up in the working directory.
pub const MANIFEST_FILE: &str = "dtx.yaml";

/// Project manifest loaded from dtx.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Path of the token document to export.
    pub tokens: PathBuf,

    /// Output directory for generated artifacts.
    pub output: PathBuf,

    /// Theme whose overrides apply; the document's first theme if unset.
    pub theme: Option<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            tokens: PathBuf::from("tokens.json"),
            output: PathBuf::from("dist"),
            theme: None,
        }
    }
}

impl Manifest {
    /// Load a manifest from a dtx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DtxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DtxError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check dtx.yaml syntax".to_string()),
        })
    }

    /// Load the manifest from the working directory when present,
    /// defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();
        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.tokens, PathBuf::from("tokens.json"));
        assert!(manifest.theme.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
tokens: design/tokens.json
output: generated
theme: dark
"#;
        let manifest = Manifest::parse(yaml).unwrap();
        assert_eq!(manifest.tokens, PathBuf::from("design/tokens.json"));
        assert_eq!(manifest.output, PathBuf::from("generated"));
        assert_eq!(manifest.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();
        assert_eq!(manifest.tokens, PathBuf::from("tokens.json"));
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert!(manifest.theme.is_none());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_load_or_default_with_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "theme: dark").unwrap();

        let manifest = Manifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        assert!(Manifest::parse("tokens: [unclosed").is_err());
    }
}
