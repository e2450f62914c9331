//! Core data model: tokens, groups, themes, and colours.

mod colour;
mod group;
mod theme;
mod token;

pub use colour::Colour;
pub use group::{find_group, TokenGroup};
pub use theme::{Theme, ThemeOverrides};
pub use token::{
    token_map, ColourValue, DimensionValue, GradientStop, GradientValue, Point, Token, TokenKind,
    TokenMap, TokenValue,
};
