//! tvOS colorset assets.
//!
//! Every colour token becomes a self-contained `.colorset` directory with a
//! `Contents.json` in the Xcode asset-catalog format: sRGB colour space,
//! decimal channel strings, a 2-decimal alpha, and the fixed metadata block.

use serde::Serialize;

use crate::error::DtxError;
use crate::naming::{resolve_name, CaseStyle};
use crate::resolve::colour_components;
use crate::types::{Token, TokenGroup, TokenKind, TokenMap};

use super::{mismatched_payload, Artifact, ExportOutcome};

#[derive(Serialize)]
struct ColorsetDocument {
    colors: Vec<ColorsetEntry>,
    info: ColorsetInfo,
}

#[derive(Serialize)]
struct ColorsetEntry {
    color: ColorsetColor,
    idiom: &'static str,
}

#[derive(Serialize)]
struct ColorsetColor {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: ColorsetComponents,
}

/// Channel components as strings, alphabetical like the catalog format.
#[derive(Serialize)]
struct ColorsetComponents {
    alpha: String,
    blue: String,
    green: String,
    red: String,
}

#[derive(Serialize)]
struct ColorsetInfo {
    author: &'static str,
    version: u32,
}

pub fn generate(tokens: &[Token], groups: &[TokenGroup], map: &TokenMap<'_>) -> ExportOutcome {
    let mut outcome = ExportOutcome::new();

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Colour) {
        match colorset(token, groups, map) {
            Ok(artifact) => outcome.push(artifact),
            Err(error) => outcome.fail(token, error),
        }
    }

    outcome
}

fn colorset(
    token: &Token,
    groups: &[TokenGroup],
    map: &TokenMap<'_>,
) -> Result<Artifact, DtxError> {
    let name = resolve_name(token, groups, CaseStyle::Camel)?;
    let value = token
        .colour_value()
        .ok_or_else(|| mismatched_payload(token))?;

    let (red, green, blue, alpha) =
        colour_components(value, map).map_err(|message| DtxError::MalformedColour {
            token_id: token.id.clone(),
            message,
        })?;

    let document = ColorsetDocument {
        colors: vec![ColorsetEntry {
            color: ColorsetColor {
                color_space: "srgb",
                components: ColorsetComponents {
                    alpha,
                    blue,
                    green,
                    red,
                },
            },
            idiom: "universal",
        }],
        info: ColorsetInfo {
            author: "xcode",
            version: 1,
        },
    };

    Ok(Artifact::new(
        format!("./apple/tvos/{}.colorset", name),
        "Contents.json",
        tab_json(&document)?,
    ))
}

/// Serialize with tab indentation, matching the asset-catalog convention.
fn tab_json<T: Serialize>(value: &T) -> Result<String, DtxError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| DtxError::Export {
            message: format!("Failed to serialize colorset: {}", e),
            help: None,
        })?;
    String::from_utf8(buf).map_err(|e| DtxError::Export {
        message: format!("Colorset serialization produced invalid UTF-8: {}", e),
        help: None,
    })
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
    fn test_one_colorset_per_colour_token() {
        let tokens = vec![
            colour_token("t1", "Primary Blue", ColourValue::opaque(26, 43, 60)),
            colour_token("t2", "Accent", ColourValue::opaque(255, 0, 0)),
        ];
        let map = token_map(&tokens);

        let outcome = generate(&tokens, &groups(), &map);
        assert_eq!(outcome.artifacts.len(), 2);
        assert_eq!(outcome.artifacts[0].dir, "./apple/tvos/primaryBlue.colorset");
        assert_eq!(outcome.artifacts[0].file_name, "Contents.json");
        assert_eq!(outcome.artifacts[1].dir, "./apple/tvos/accent.colorset");
    }

    #[test]
    fn test_colorset_document_shape() {
        let tokens = vec![colour_token(
            "t1",
            "Scrim",
            ColourValue::opaque(17, 34, 51).with_opacity(0.5),
        )];
        let map = token_map(&tokens);

        let outcome = generate(&tokens, &groups(), &map);
        let contents = &outcome.artifacts[0].contents;

        let parsed: serde_json::Value = serde_json::from_str(contents).unwrap();
        let components = &parsed["colors"][0]["color"]["components"];
        assert_eq!(components["red"], "17");
        assert_eq!(components["green"], "34");
        assert_eq!(components["blue"], "51");
        assert_eq!(components["alpha"], "0.50");
        assert_eq!(parsed["colors"][0]["color"]["color-space"], "srgb");
        assert_eq!(parsed["colors"][0]["idiom"], "universal");
        assert_eq!(parsed["info"]["author"], "xcode");
        assert_eq!(parsed["info"]["version"], 1);
    }

    #[test]
    fn test_tab_indented_output() {
        let tokens = vec![colour_token("t1", "Primary", ColourValue::opaque(1, 2, 3))];
        let map = token_map(&tokens);

        let outcome = generate(&tokens, &groups(), &map);
        let contents = &outcome.artifacts[0].contents;

        assert!(contents.starts_with("{\n\t\"colors\""));
        assert!(contents.contains("\n\t\t\t\"color\""));
    }

    #[test]
    fn test_opacity_rendering() {
        let tokens = vec![colour_token("t1", "Solid", ColourValue::opaque(0, 0, 0))];
        let map = token_map(&tokens);

        let outcome = generate(&tokens, &groups(), &map);
        assert!(outcome.artifacts[0].contents.contains("\"alpha\": \"1.00\""));
    }
}
