//! Token model: kinds, typed value payloads, and the token entity itself.
//!
//! Tokens are read-only snapshots for the duration of an export run. The
//! value payload shape depends on the declared kind; kinds the generators do
//! not understand are carried as raw JSON and pass through unfiltered.

use std::collections::HashMap;
use std::fmt;

/// The declared kind of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Colour,
    Dimension,
    Gradient,
    /// Any kind the generators do not handle (typography, shadow, ...).
    Other(String),
}

impl TokenKind {
    /// Parse a kind from the document's `tokenType` field.
    pub fn parse(s: &str) -> Self {
        match s {
            "color" | "colour" => TokenKind::Colour,
            "dimension" => TokenKind::Dimension,
            "gradient" => TokenKind::Gradient,
            other => TokenKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Colour => write!(f, "color"),
            TokenKind::Dimension => write!(f, "dimension"),
            TokenKind::Gradient => write!(f, "gradient"),
            TokenKind::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A 2D coordinate on the unit square, used for gradient axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A colour payload: raw channels plus a separate opacity measure.
///
/// Channels are stored wide and range-checked when formatted, so an
/// out-of-range document value surfaces as a malformed-colour error naming
/// the token rather than a deserialization failure. `reference` points at
/// another token whose colour value replaces this one when references are
/// allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColourValue {
    pub r: i64,
    pub g: i64,
    pub b: i64,
    /// Fractional opacity in 0.0..=1.0, independent of the channels.
    pub opacity: f64,
    pub reference: Option<String>,
}

impl ColourValue {
    /// An opaque colour value from channel components.
    pub fn opaque(r: i64, g: i64, b: i64) -> Self {
        Self {
            r,
            g,
            b,
            opacity: 1.0,
            ..Default::default()
        }
    }

    /// A colour value that resolves through another token.
    pub fn reference(token_id: impl Into<String>) -> Self {
        Self {
            opacity: 1.0,
            reference: Some(token_id.into()),
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A dimension payload. Unit semantics are decided by the consuming
/// generator and never stored on the token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionValue {
    pub measure: f64,
}

/// One colour+position pair within a gradient's ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub colour: ColourValue,
}

/// A gradient payload: ordered stops plus the directional axis.
///
/// Only 2- and 3-stop gradients are renderable; the count is checked by the
/// generators, never silently truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientValue {
    /// Gradient type tag (`linear`, `radial`), carried through unmodified.
    pub kind: String,
    pub from: Point,
    pub to: Point,
    pub stops: Vec<GradientStop>,
}

/// A token's typed value payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Colour(ColourValue),
    Dimension(DimensionValue),
    Gradient(GradientValue),
    /// Unhandled kinds keep their raw JSON payload.
    Other(serde_json::Value),
}

/// An atomic design value with a stable identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    /// Display name, the last segment of the resolved identifier path.
    pub name: String,
    pub kind: TokenKind,
    pub parent_group_id: String,
    pub value: TokenValue,
}

impl Token {
    /// The colour payload, if this is a colour token.
    pub fn colour_value(&self) -> Option<&ColourValue> {
        match &self.value {
            TokenValue::Colour(v) => Some(v),
            _ => None,
        }
    }

    /// The dimension payload, if this is a dimension token.
    pub fn dimension_value(&self) -> Option<&DimensionValue> {
        match &self.value {
            TokenValue::Dimension(v) => Some(v),
            _ => None,
        }
    }

    /// The gradient payload, if this is a gradient token.
    pub fn gradient_value(&self) -> Option<&GradientValue> {
        match &self.value {
            TokenValue::Gradient(v) => Some(v),
            _ => None,
        }
    }
}

/// Token lookup by id, used for colour reference resolution.
///
/// Kept distinct from the group list throughout: generators thread both, and
/// the identifier resolver only ever sees groups.
pub type TokenMap<'a> = HashMap<&'a str, &'a Token>;

/// Build an id-keyed lookup over a token slice.
pub fn token_map(tokens: &[Token]) -> TokenMap<'_> {
    tokens.iter().map(|t| (t.id.as_str(), t)).collect()
}
