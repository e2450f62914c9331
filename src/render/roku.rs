//! Roku BrightScript skin constants.
//!
//! Colour tokens become fields of a single associative array in
//! `skins.brs`, rendered as `0xRRGGBBAA` literals. This is the one
//! generator that consumes theme overrides: an overridden value wins over
//! the token's base value.

use crate::error::DtxError;
use crate::naming::{resolve_name, CaseStyle};
use crate::resolve::{colour_to_string, ColourOptions};
use crate::types::{ThemeOverrides, Token, TokenGroup, TokenKind, TokenMap};

use super::{mismatched_payload, Artifact, ExportOutcome};

const HEADER: &str = "' Skin constants generated from the design token set.\n\
                      ' Regenerate with `dtx export`; edits here will be overwritten.\n";

pub fn generate(
    tokens: &[Token],
    groups: &[TokenGroup],
    map: &TokenMap<'_>,
    overrides: &ThemeOverrides,
) -> ExportOutcome {
    let mut outcome = ExportOutcome::new();

    let mut lines = Vec::new();
    for token in tokens.iter().filter(|t| t.kind == TokenKind::Colour) {
        match constant_line(token, groups, map, overrides) {
            Ok(line) => lines.push(line),
            Err(error) => outcome.fail(token, error),
        }
    }

    let content = format!(
        "{}\nfunction getSkins() as object\n    return {{\n{}\n    }}\nend function\n",
        HEADER,
        lines.join("\n")
    );
    outcome.push(Artifact::new("./roku", "skins.brs", content));
    outcome
}

fn constant_line(
    token: &Token,
    groups: &[TokenGroup],
    map: &TokenMap<'_>,
    overrides: &ThemeOverrides,
) -> Result<String, DtxError> {
    let name = resolve_name(token, groups, CaseStyle::Camel)?;

    // Theme override wins over the base value when present.
    let value = overrides
        .get(&token.id)
        .or_else(|| token.colour_value())
        .ok_or_else(|| mismatched_payload(token))?;

    let hex = colour_to_string(value, map, &ColourOptions::hex8()).map_err(|message| {
        DtxError::MalformedColour {
            token_id: token.id.clone(),
            message,
        }
    })?;

    Ok(format!(
        "        {}: \"0x{}\"",
        name,
        hex.trim_start_matches('#')
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{token_map, ColourValue, TokenValue};
    use pretty_assertions::assert_eq;

    fn colour_token(id: &str, name: &str, value: ColourValue) -> Token {
        Token {
            id: id.to_string(),
            name: name.to_string(),
            kind: TokenKind::Colour,
            parent_group_id: "root".to_string(),
            value: TokenValue::Colour(value),
        }
    }

    fn groups() -> Vec<TokenGroup> {
        vec![TokenGroup::root("root", "Color")]
    }

    #[test]
    fn test_constants_block() {
        let tokens = vec![
            colour_token("t1", "Primary Blue", ColourValue::opaque(0x1a, 0x2b, 0x3c)),
            colour_token(
                "t2",
                "Scrim",
                ColourValue::opaque(0, 0, 0).with_opacity(0.5),
            ),
        ];
        let map = token_map(&tokens);

        let outcome = generate(&tokens, &groups(), &map, &ThemeOverrides::new());
        assert_eq!(outcome.artifacts.len(), 1);

        let skins = &outcome.artifacts[0];
        assert_eq!(skins.dir, "./roku");
        assert_eq!(skins.file_name, "skins.brs");
        assert!(skins.contents.contains("function getSkins() as object"));
        assert!(skins.contents.contains("        primaryBlue: \"0x1a2b3cff\""));
        assert!(skins.contents.contains("        scrim: \"0x00000080\""));
        assert!(skins.contents.ends_with("end function\n"));
    }

    #[test]
    fn test_theme_override_wins() {
        let tokens = vec![colour_token(
            "t1",
            "Primary",
            ColourValue::opaque(0x1a, 0x2b, 0x3c),
        )];
        let map = token_map(&tokens);

        let mut overrides = ThemeOverrides::new();
        overrides.insert("t1".to_string(), ColourValue::opaque(0xff, 0x00, 0x00));

        let outcome = generate(&tokens, &groups(), &map, &overrides);
        let skins = &outcome.artifacts[0];
        assert!(skins.contents.contains("primary: \"0xff0000ff\""));
        assert!(!skins.contents.contains("0x1a2b3cff"));
    }

    #[test]
    fn test_override_for_other_token_is_ignored() {
        let tokens = vec![colour_token(
            "t1",
            "Primary",
            ColourValue::opaque(0x1a, 0x2b, 0x3c),
        )];
        let map = token_map(&tokens);

        let mut overrides = ThemeOverrides::new();
        overrides.insert("elsewhere".to_string(), ColourValue::opaque(1, 1, 1));

        let outcome = generate(&tokens, &groups(), &map, &overrides);
        assert!(outcome.artifacts[0].contents.contains("0x1a2b3cff"));
    }

    #[test]
    fn test_override_may_reference_other_tokens() {
        let tokens = vec![
            colour_token("base", "Base Red", ColourValue::opaque(0xff, 0, 0)),
            colour_token("t1", "Primary", ColourValue::opaque(0, 0, 0xff)),
        ];
        let map = token_map(&tokens);

        let mut overrides = ThemeOverrides::new();
        overrides.insert("t1".to_string(), ColourValue::reference("base"));

        let outcome = generate(&tokens, &groups(), &map, &overrides);
        assert!(outcome.artifacts[0].contents.contains("primary: \"0xff0000ff\""));
    }
}
