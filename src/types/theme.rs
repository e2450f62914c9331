//! Theme override maps.

use std::collections::HashMap;

use super::token::ColourValue;

/// Per-theme replacement values, keyed by token id.
///
/// Overrides are colour payloads: the only consumer is the colour-only Roku
/// generator, which prefers an overridden value when one exists for a token.
pub type ThemeOverrides = HashMap<String, ColourValue>;

/// One theme's deviations from the base token values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Theme {
    pub name: String,
    pub overrides: ThemeOverrides,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: ThemeOverrides::new(),
        }
    }
}
