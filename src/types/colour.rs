//! Packed RGBA colour.

use crate::error::{DtxError, Result};

/// A resolved colour with 8-bit channels.
///
/// `ColourValue` payloads collapse to this once references are followed and
/// ranges are checked; hex spellings in the document parse through it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex colour: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    /// The hash is optional and digits are case-insensitive.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // Short forms double every digit: #abc → aabbcc, #abcd → aabbccdd.
        let expanded: String = match digits.chars().count() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => digits.to_string(),
        };

        let packed = match expanded.len() {
            6 => u32::from_str_radix(&expanded, 16)
                .ok()
                .map(|rgb| (rgb << 8) | 0xff),
            8 => u32::from_str_radix(&expanded, 16).ok(),
            _ => None,
        };

        match packed {
            Some(value) => {
                let [r, g, b, a] = value.to_be_bytes();
                Ok(Self { r, g, b, a })
            }
            None => Err(DtxError::Parse {
                message: format!("Invalid hex colour: {}", input),
                help: Some("Use #rgb, #rgba, #rrggbb, or #rrggbbaa".to_string()),
            }),
        }
    }

    /// Lowercase 8-digit RGBA hex with a leading `#`, alpha always present.
    pub fn css_hex8(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Lowercase hex with a leading `#`; the alpha pair is omitted when opaque.
    pub fn css_smart_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            self.css_hex8()
        }
    }
}
