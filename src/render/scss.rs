//! SCSS variable output for the CTV web client.
//!
//! Colour tokens become one `$name: value;` declaration each in a single
//! `constants.scss`, using the smart hex rendering.

use crate::error::DtxError;
use crate::naming::{resolve_name, CaseStyle};
use crate::resolve::{colour_to_string, ColourOptions};
use crate::types::{Token, TokenGroup, TokenKind, TokenMap};

use super::{mismatched_payload, Artifact, ExportOutcome};

pub fn generate(tokens: &[Token], groups: &[TokenGroup], map: &TokenMap<'_>) -> ExportOutcome {
    let mut outcome = ExportOutcome::new();

    let mut lines = Vec::new();
    for token in tokens.iter().filter(|t| t.kind == TokenKind::Colour) {
        match declaration(token, groups, map) {
            Ok(line) => lines.push(line),
            Err(error) => outcome.fail(token, error),
        }
    }

    let content = format!(
        "// Design token constants generated by dtx; do not edit.\n\n{}\n",
        lines.join("\n")
    );
    outcome.push(Artifact::new("./ctv", "constants.scss", content));
    outcome
}

fn declaration(
    token: &Token,
    groups: &[TokenGroup],
    map: &TokenMap<'_>,
) -> Result<String, DtxError> {
    let name = resolve_name(token, groups, CaseStyle::Snake)?;
    let value = token
        .colour_value()
        .ok_or_else(|| mismatched_payload(token))?;
    let rendered =
        colour_to_string(value, map, &ColourOptions::smart_hex()).map_err(|message| {
            DtxError::MalformedColour {
                token_id: token.id.clone(),
                message,
            }
        })?;
    Ok(format!("${}: {};", name, rendered))
}
