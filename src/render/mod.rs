//! Platform generators and the export orchestrator.
//!
//! Each generator filters the token set by kind, maps surviving tokens
//! through the identifier resolver and value formatters, and returns text
//! artifacts. Generators are pure functions of read-only snapshots; running
//! the full set twice on identical input produces byte-identical output.

pub mod android;
pub mod roku;
pub mod scss;
pub mod tvos;

use std::path::{Path, PathBuf};

use crate::error::DtxError;
use crate::types::{token_map, Token, TokenGroup, TokenKind, ThemeOverrides};

/// One generated output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Relative directory path, e.g. `./android/ott/values`.
    pub dir: String,
    pub file_name: String,
    pub contents: String,
}

impl Artifact {
    pub fn new(
        dir: impl Into<String>,
        file_name: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Directory plus file name, without the leading `./`.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.dir.trim_start_matches("./")).join(&self.file_name)
    }
}

/// A per-token generation failure.
///
/// Failures are isolated: the offending token is skipped and every other
/// artifact is still produced.
#[derive(Debug)]
pub struct TokenFailure {
    pub token_id: String,
    pub kind: TokenKind,
    pub error: DtxError,
}

/// Ordered artifacts plus the per-token failures collected along the way.
#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub artifacts: Vec<Artifact>,
    pub failures: Vec<TokenFailure>,
}

impl ExportOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    /// Record a failure for `token` and move on.
    pub fn fail(&mut self, token: &Token, error: DtxError) {
        self.failures.push(TokenFailure {
            token_id: token.id.clone(),
            kind: token.kind.clone(),
            error,
        });
    }

    /// Append another outcome, preserving order.
    pub fn merge(&mut self, other: ExportOutcome) {
        self.artifacts.extend(other.artifacts);
        self.failures.extend(other.failures);
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// A token whose declared kind and value payload disagree. Documents loaded
/// through the parser cannot produce this; hand-built token sets can.
fn mismatched_payload(token: &Token) -> DtxError {
    DtxError::Export {
        message: format!(
            "token '{}' declares kind {} but carries a different value payload",
            token.id, token.kind
        ),
        help: None,
    }
}

/// Run every platform generator and flatten the results.
///
/// Artifact order is fixed: the Roku constants file, the SCSS file, the
/// Android resources (color.xml, one drawable per gradient, dimens.xml),
/// then one tvOS colorset per colour token.
pub fn generate_all(
    tokens: &[Token],
    groups: &[TokenGroup],
    overrides: &ThemeOverrides,
) -> ExportOutcome {
    let map = token_map(tokens);

    let mut outcome = ExportOutcome::new();
    outcome.merge(roku::generate(tokens, groups, &map, overrides));
    outcome.merge(scss::generate(tokens, groups, &map));
    outcome.merge(android::generate(tokens, groups, &map));
    outcome.merge(tvos::generate(tokens, groups, &map));
    outcome
}
