//! Colour resolution service.
//!
//! Narrow interface consumed by the generators: take a colour payload,
//! resolve any token references against the token map, range-check the
//! channels and opacity, and format the result. Resolution always happens
//! before formatting; nothing here closes over unfinished state.

use crate::format::format_opacity;
use crate::types::{Colour, ColourValue, TokenMap};

/// Maximum reference-chain length before resolution gives up.
///
/// Real documents chain one or two aliases deep; anything longer is either a
/// cycle or a broken document.
const MAX_REFERENCE_DEPTH: usize = 8;

/// Output format for a resolved colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourFormat {
    /// Lowercase `#rrggbbaa`, alpha always present.
    Hex8,
    /// Lowercase `#rrggbb`, alpha appended only when not fully opaque.
    SmartHex,
}

/// Options threaded into colour resolution.
#[derive(Debug, Clone, Copy)]
pub struct ColourOptions {
    /// Follow token references before formatting.
    pub allow_references: bool,
    /// Fractional precision for decimal-based formats. Hex output ignores
    /// it, but callers state their precision as part of the contract.
    pub decimals: u8,
    pub format: ColourFormat,
}

impl ColourOptions {
    pub fn hex8() -> Self {
        Self {
            allow_references: true,
            decimals: 3,
            format: ColourFormat::Hex8,
        }
    }

    pub fn smart_hex() -> Self {
        Self {
            allow_references: true,
            decimals: 3,
            format: ColourFormat::SmartHex,
        }
    }
}

/// Follow the reference chain to a concrete colour payload.
fn follow_references<'a>(
    value: &'a ColourValue,
    tokens: &TokenMap<'a>,
) -> Result<&'a ColourValue, String> {
    let mut current = value;
    let mut depth = 0;

    while let Some(reference) = &current.reference {
        depth += 1;
        if depth > MAX_REFERENCE_DEPTH {
            return Err(format!(
                "reference chain exceeds {} hops (cycle via '{}'?)",
                MAX_REFERENCE_DEPTH, reference
            ));
        }

        let target = tokens
            .get(reference.as_str())
            .ok_or_else(|| format!("references unknown token '{}'", reference))?;
        current = target
            .colour_value()
            .ok_or_else(|| format!("references non-colour token '{}'", reference))?;
    }

    Ok(current)
}

/// Resolve a colour payload to validated channels plus its opacity measure.
///
/// Returns the packed `Colour` (alpha derived from the opacity) and the raw
/// opacity for formats that render it separately.
pub fn concrete_colour(
    value: &ColourValue,
    tokens: &TokenMap<'_>,
    allow_references: bool,
) -> Result<(Colour, f64), String> {
    let value = if allow_references {
        follow_references(value, tokens)?
    } else if value.reference.is_some() {
        return Err("references are not allowed in this context".to_string());
    } else {
        value
    };

    for (channel, raw) in [("red", value.r), ("green", value.g), ("blue", value.b)] {
        if !(0..=255).contains(&raw) {
            return Err(format!("{} channel {} is outside 0..=255", channel, raw));
        }
    }
    if !(0.0..=1.0).contains(&value.opacity) {
        return Err(format!("opacity {} is outside 0.0..=1.0", value.opacity));
    }

    let alpha = (value.opacity * 255.0).round() as u8;
    let colour = Colour::new(value.r as u8, value.g as u8, value.b as u8, alpha);
    Ok((colour, value.opacity))
}

/// Resolve and format a colour payload.
pub fn colour_to_string(
    value: &ColourValue,
    tokens: &TokenMap<'_>,
    options: &ColourOptions,
) -> Result<String, String> {
    let (colour, _) = concrete_colour(value, tokens, options.allow_references)?;
    Ok(match options.format {
        ColourFormat::Hex8 => colour.css_hex8(),
        ColourFormat::SmartHex => colour.css_smart_hex(),
    })
}

/// Channel-triplet rendering: decimal channel strings plus the 2-decimal
/// opacity string, for structured asset formats.
pub fn colour_components(
    value: &ColourValue,
    tokens: &TokenMap<'_>,
) -> Result<(String, String, String, String), String> {
    let (colour, opacity) = concrete_colour(value, tokens, true)?;
    Ok((
        colour.r.to_string(),
        colour.g.to_string(),
        colour.b.to_string(),
        format_opacity(opacity),
    ))
}
