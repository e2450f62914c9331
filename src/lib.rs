//! dtx - Design token export pipeline
//!
//! A library for transforming a design system's token document into
//! platform resource files: Android XML resources, Roku skin constants,
//! SCSS variables, and tvOS colorset assets.

pub mod cli;
pub mod error;
pub mod format;
pub mod naming;
pub mod output;
pub mod render;
pub mod resolve;
pub mod source;
pub mod types;
pub mod validation;

pub use error::{DtxError, Result};
pub use format::{argb_hex, format_opacity, format_scalar, gradient_angle};
pub use naming::{resolve_name, CaseStyle};
pub use render::{generate_all, Artifact, ExportOutcome, TokenFailure};
pub use resolve::{colour_components, colour_to_string, concrete_colour, ColourFormat, ColourOptions};
pub use source::{Manifest, TokenDocument};
pub use types::{
    token_map, Colour, ColourValue, DimensionValue, GradientStop, GradientValue, Point, Theme,
    ThemeOverrides, Token, TokenGroup, TokenKind, TokenMap, TokenValue,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
