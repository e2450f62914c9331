//! Token document loading.
//!
//! The document is the export pipeline's single input: a JSON file holding
//! the token list, the group tree, and any themes, fetched once per run.
//! Parsing is strict about shape but deliberately permissive about content
//! that the generators validate themselves (channel ranges, gradient stop
//! counts), so those problems surface as per-token errors naming the token
//! rather than as a failed load.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DtxError, Result};
use crate::types::{
    Colour, ColourValue, DimensionValue, GradientStop, GradientValue, Point, Theme,
    ThemeOverrides, Token, TokenGroup, TokenKind, TokenValue,
};

/// A parsed token document: read-only snapshots for one export run.
#[derive(Debug, Clone, Default)]
pub struct TokenDocument {
    pub tokens: Vec<Token>,
    pub groups: Vec<TokenGroup>,
    pub themes: Vec<Theme>,
}

impl TokenDocument {
    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DtxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read token document: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a document from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content).map_err(|e| DtxError::Parse {
            message: format!("Invalid token document: {}", e),
            help: Some("Check the document against the dtx input schema".to_string()),
        })?;

        let groups = raw
            .groups
            .into_iter()
            .map(|g| TokenGroup {
                id: g.id,
                name: g.name,
                parent_id: g.parent_id,
                is_root: g.is_root,
            })
            .collect();

        let mut tokens = Vec::with_capacity(raw.tokens.len());
        for token in raw.tokens {
            tokens.push(convert_token(token)?);
        }

        let mut themes = Vec::with_capacity(raw.themes.len());
        for theme in raw.themes {
            themes.push(convert_theme(theme)?);
        }

        Ok(Self {
            tokens,
            groups,
            themes,
        })
    }

    /// Overrides for the selected theme.
    ///
    /// With no name, the first theme applies (an empty map when the document
    /// has none); naming an unknown theme is an error.
    pub fn theme_overrides(&self, name: Option<&str>) -> Result<ThemeOverrides> {
        match name {
            None => Ok(self
                .themes
                .first()
                .map(|t| t.overrides.clone())
                .unwrap_or_default()),
            Some(name) => self
                .themes
                .iter()
                .find(|t| t.name == name)
                .map(|t| t.overrides.clone())
                .ok_or_else(|| DtxError::Export {
                    message: format!("Theme '{}' not found in the token document", name),
                    help: Some(format!(
                        "Available themes: {}",
                        self.themes
                            .iter()
                            .map(|t| t.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )),
                }),
        }
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    tokens: Vec<RawToken>,
    #[serde(default)]
    groups: Vec<RawGroup>,
    #[serde(default)]
    themes: Vec<RawTheme>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToken {
    id: String,
    name: String,
    token_type: String,
    parent_group_id: String,
    value: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroup {
    id: String,
    name: String,
    #[serde(default)]
    parent_id: Option<String>,
    #[serde(default)]
    is_root: bool,
}

#[derive(Deserialize)]
struct RawTheme {
    name: String,
    #[serde(default)]
    overrides: serde_json::Map<String, serde_json::Value>,
}

/// Colour payloads come in two spellings: a hex string, or a channel object
/// with a separate opacity and an optional token reference.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColour {
    Hex(String),
    Channels {
        #[serde(default)]
        color: Option<RawChannels>,
        #[serde(default)]
        opacity: Option<RawOpacity>,
        #[serde(rename = "referencedTokenId", default)]
        referenced_token_id: Option<String>,
    },
}

#[derive(Deserialize)]
struct RawChannels {
    r: i64,
    g: i64,
    b: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOpacity {
    Measure { measure: f64 },
    Number(f64),
}

impl RawOpacity {
    fn measure(&self) -> f64 {
        match self {
            RawOpacity::Measure { measure } => *measure,
            RawOpacity::Number(n) => *n,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Measure { measure: f64 },
    Number(f64),
}

#[derive(Deserialize)]
struct RawGradient {
    #[serde(rename = "type", default = "default_gradient_kind")]
    kind: String,
    from: RawPoint,
    to: RawPoint,
    #[serde(default)]
    stops: Vec<RawStop>,
}

fn default_gradient_kind() -> String {
    "linear".to_string()
}

#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawStop {
    position: f64,
    color: serde_json::Value,
}

fn convert_token(raw: RawToken) -> Result<Token> {
    let kind = TokenKind::parse(&raw.token_type);
    let value = parse_value(&kind, raw.value).map_err(|message| DtxError::Parse {
        message: format!("Token '{}': {}", raw.id, message),
        help: None,
    })?;

    Ok(Token {
        id: raw.id,
        name: raw.name,
        kind,
        parent_group_id: raw.parent_group_id,
        value,
    })
}

fn parse_value(kind: &TokenKind, value: serde_json::Value) -> std::result::Result<TokenValue, String> {
    match kind {
        TokenKind::Colour => Ok(TokenValue::Colour(parse_colour(value)?)),
        TokenKind::Dimension => {
            let raw: RawDimension =
                serde_json::from_value(value).map_err(|e| format!("invalid dimension value: {}", e))?;
            let measure = match raw {
                RawDimension::Measure { measure } => measure,
                RawDimension::Number(n) => n,
            };
            Ok(TokenValue::Dimension(DimensionValue { measure }))
        }
        TokenKind::Gradient => {
            let raw: RawGradient =
                serde_json::from_value(value).map_err(|e| format!("invalid gradient value: {}", e))?;
            let mut stops = Vec::with_capacity(raw.stops.len());
            for stop in raw.stops {
                stops.push(GradientStop {
                    position: stop.position,
                    colour: parse_colour(stop.color)
                        .map_err(|e| format!("invalid gradient stop: {}", e))?,
                });
            }
            Ok(TokenValue::Gradient(GradientValue {
                kind: raw.kind,
                from: Point::new(raw.from.x, raw.from.y),
                to: Point::new(raw.to.x, raw.to.y),
                stops,
            }))
        }
        // Unhandled kinds pass through with their raw payload.
        TokenKind::Other(_) => Ok(TokenValue::Other(value)),
    }
}

fn parse_colour(value: serde_json::Value) -> std::result::Result<ColourValue, String> {
    let raw: RawColour =
        serde_json::from_value(value).map_err(|e| format!("invalid colour value: {}", e))?;

    match raw {
        RawColour::Hex(s) => {
            let colour = Colour::from_hex(&s).map_err(|e| e.to_string())?;
            Ok(ColourValue {
                r: colour.r as i64,
                g: colour.g as i64,
                b: colour.b as i64,
                opacity: colour.a as f64 / 255.0,
                reference: None,
            })
        }
        RawColour::Channels {
            color,
            opacity,
            referenced_token_id,
        } => {
            if color.is_none() && referenced_token_id.is_none() {
                return Err("colour value has neither channels nor a reference".to_string());
            }
            let channels = color.unwrap_or(RawChannels { r: 0, g: 0, b: 0 });
            Ok(ColourValue {
                r: channels.r,
                g: channels.g,
                b: channels.b,
                opacity: opacity.map(|o| o.measure()).unwrap_or(1.0),
                reference: referenced_token_id,
            })
        }
    }
}

fn convert_theme(raw: RawTheme) -> Result<Theme> {
    let mut overrides = ThemeOverrides::new();
    for (token_id, value) in raw.overrides {
        let colour = parse_colour(value).map_err(|message| DtxError::Parse {
            message: format!(
                "Theme '{}', override for '{}': {}",
                raw.name, token_id, message
            ),
            help: Some("Theme overrides must be colour values".to_string()),
        })?;
        overrides.insert(token_id, colour);
    }

    Ok(Theme {
        name: raw.name,
        overrides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r##"{
        "groups": [
            {"id": "g-color", "name": "Color", "isRoot": true},
            {"id": "g-brand", "name": "Brand", "parentId": "g-color"}
        ],
        "tokens": [
            {
                "id": "t-primary",
                "name": "Primary",
                "tokenType": "color",
                "parentGroupId": "g-brand",
                "value": {"color": {"r": 26, "g": 43, "b": 60}, "opacity": {"measure": 0.5}}
            },
            {
                "id": "t-accent",
                "name": "Accent",
                "tokenType": "color",
                "parentGroupId": "g-brand",
                "value": "#ff8800"
            },
            {
                "id": "t-alias",
                "name": "Alias",
                "tokenType": "color",
                "parentGroupId": "g-brand",
                "value": {"referencedTokenId": "t-primary"}
            },
            {
                "id": "t-size",
                "name": "Font Size Large",
                "tokenType": "dimension",
                "parentGroupId": "g-color",
                "value": {"measure": 16.004}
            },
            {
                "id": "t-fade",
                "name": "Fade",
                "tokenType": "gradient",
                "parentGroupId": "g-color",
                "value": {
                    "type": "linear",
                    "from": {"x": 0, "y": 0},
                    "to": {"x": 1, "y": 0},
                    "stops": [
                        {"position": 0, "color": "#000000"},
                        {"position": 1, "color": "#ffffff"}
                    ]
                }
            },
            {
                "id": "t-shadow",
                "name": "Drop",
                "tokenType": "shadow",
                "parentGroupId": "g-color",
                "value": {"blur": 4}
            }
        ],
        "themes": [
            {"name": "dark", "overrides": {"t-primary": "#000000"}}
        ]
    }"##;

    #[test]
    fn test_parse_full_document() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();
        assert_eq!(doc.tokens.len(), 6);
        assert_eq!(doc.groups.len(), 2);
        assert_eq!(doc.themes.len(), 1);
    }

    #[test]
    fn test_channel_colour_value() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();
        let value = doc.tokens[0].colour_value().unwrap();
        assert_eq!((value.r, value.g, value.b), (26, 43, 60));
        assert_eq!(value.opacity, 0.5);
        assert!(value.reference.is_none());
    }

    #[test]
    fn test_hex_colour_value() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();
        let value = doc.tokens[1].colour_value().unwrap();
        assert_eq!((value.r, value.g, value.b), (255, 136, 0));
        assert_eq!(value.opacity, 1.0);
    }

    #[test]
    fn test_reference_colour_value() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();
        let value = doc.tokens[2].colour_value().unwrap();
        assert_eq!(value.reference.as_deref(), Some("t-primary"));
    }

    #[test]
    fn test_dimension_and_gradient_values() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();
        assert_eq!(doc.tokens[3].dimension_value().unwrap().measure, 16.004);

        let gradient = doc.tokens[4].gradient_value().unwrap();
        assert_eq!(gradient.kind, "linear");
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.to, Point::new(1.0, 0.0));
    }

    #[test]
    fn test_unhandled_kind_passes_through() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();
        let token = &doc.tokens[5];
        assert_eq!(token.kind, TokenKind::Other("shadow".to_string()));
        assert_eq!(
            token.value,
            TokenValue::Other(serde_json::json!({"blur": 4}))
        );
    }

    #[test]
    fn test_theme_overrides_default_to_first_theme() {
        let doc = TokenDocument::parse(DOCUMENT).unwrap();

        let overrides = doc.theme_overrides(None).unwrap();
        assert!(overrides.contains_key("t-primary"));

        let named = doc.theme_overrides(Some("dark")).unwrap();
        assert_eq!(named.len(), 1);

        assert!(doc.theme_overrides(Some("sepia")).is_err());
    }

    #[test]
    fn test_no_themes_means_no_overrides() {
        let doc = TokenDocument::parse(r#"{"tokens": [], "groups": []}"#).unwrap();
        assert!(doc.theme_overrides(None).unwrap().is_empty());
    }

    #[test]
    fn test_bad_value_names_the_token() {
        let content = r#"{
            "tokens": [{
                "id": "t-bad",
                "name": "Bad",
                "tokenType": "dimension",
                "parentGroupId": "g",
                "value": {"wrong": true}
            }],
            "groups": []
        }"#;

        let err = TokenDocument::parse(content).unwrap_err();
        assert!(err.to_string().contains("t-bad"), "got: {}", err);
    }

    #[test]
    fn test_non_colour_theme_override_is_an_error() {
        let content = r#"{
            "tokens": [],
            "groups": [],
            "themes": [{"name": "dark", "overrides": {"t1": {"measure": 4}}}]
        }"#;

        assert!(TokenDocument::parse(content).is_err());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = TokenDocument::parse("{not json").unwrap_err();
        assert!(matches!(err, DtxError::Parse { .. }));
    }
}
