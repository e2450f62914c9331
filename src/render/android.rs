//! Android OTT resource output.
//!
//! Colour tokens become `values/color.xml`, dimension tokens become
//! `values/dimens.xml`, and every gradient token becomes its own drawable
//! shape file named after its snake_case identifier.

use crate::error::DtxError;
use crate::format::{argb_hex, format_scalar, gradient_angle};
use crate::naming::{resolve_name, CaseStyle};
use crate::resolve::{colour_to_string, ColourOptions};
use crate::types::{GradientValue, Token, TokenGroup, TokenKind, TokenMap};

use super::{mismatched_payload, Artifact, ExportOutcome};

const VALUES_DIR: &str = "./android/ott/values";
const DRAWABLE_DIR: &str = "./android/ott/drawable";

/// Dimension identifiers that are unitless ratios in Android resources.
const UNITLESS_MARKERS: [&str; 3] = ["letter_spacing", "line_height", "font_weight"];

pub fn generate(
    tokens: &[Token],
    groups: &[TokenGroup],
    map: &TokenMap<'_>,
) -> ExportOutcome {
    let mut outcome = ExportOutcome::new();

    let mut colour_lines = Vec::new();
    for token in tokens.iter().filter(|t| t.kind == TokenKind::Colour) {
        match colour_line(token, groups, map) {
            Ok(line) => colour_lines.push(line),
            Err(error) => outcome.fail(token, error),
        }
    }
    outcome.push(Artifact::new(
        VALUES_DIR,
        "color.xml",
        resources_document(&colour_lines),
    ));

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Gradient) {
        match gradient_drawable(token, groups, map) {
            Ok(artifact) => outcome.push(artifact),
            Err(error) => outcome.fail(token, error),
        }
    }

    let mut dimen_lines = Vec::new();
    for token in tokens.iter().filter(|t| t.kind == TokenKind::Dimension) {
        match dimension_line(token, groups) {
            Ok(line) => dimen_lines.push(line),
            Err(error) => outcome.fail(token, error),
        }
    }
    outcome.push(Artifact::new(
        VALUES_DIR,
        "dimens.xml",
        resources_document(&dimen_lines),
    ));

    outcome
}

/// Wrap resource lines in the fixed `<resources>` container.
fn resources_document(lines: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\t<resources>\n{}\n\t</resources>",
        lines.join("\n")
    )
}

fn colour_line(
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
    Ok(format!("\t\t<color name=\"{}\">{}</color>", name, rendered))
}

fn dimension_line(token: &Token, groups: &[TokenGroup]) -> Result<String, DtxError> {
    let name = resolve_name(token, groups, CaseStyle::Snake)?;
    let value = token
        .dimension_value()
        .ok_or_else(|| mismatched_payload(token))?;
    let rendered = format_scalar(value.measure);

    if UNITLESS_MARKERS.iter().any(|marker| name.contains(marker)) {
        Ok(format!("\t\t<dimen name=\"{}\">{}</dimen>", name, rendered))
    } else {
        Ok(format!("\t\t<dimen name=\"{}\">{}dp</dimen>", name, rendered))
    }
}

fn gradient_drawable(
    token: &Token,
    groups: &[TokenGroup],
    map: &TokenMap<'_>,
) -> Result<Artifact, DtxError> {
    let name = resolve_name(token, groups, CaseStyle::Snake)?;
    let gradient = token
        .gradient_value()
        .ok_or_else(|| mismatched_payload(token))?;

    let content = match gradient.stops.len() {
        2 => two_stop_shape(token, &name, gradient, map)?,
        3 => three_stop_shape(token, &name, gradient, map)?,
        stops => {
            return Err(DtxError::UnsupportedGradient {
                token_id: token.id.clone(),
                stops,
            })
        }
    };

    Ok(Artifact::new(
        DRAWABLE_DIR,
        format!("{}.xml", name),
        content,
    ))
}

/// A stop colour as an ARGB-ordered hex literal.
fn stop_colour(token: &Token, index: usize, gradient: &GradientValue, map: &TokenMap<'_>) -> Result<String, DtxError> {
    colour_to_string(&gradient.stops[index].colour, map, &ColourOptions::hex8())
        .map(|hex| argb_hex(&hex))
        .map_err(|message| DtxError::MalformedColour {
            token_id: token.id.clone(),
            message,
        })
}

fn three_stop_shape(
    token: &Token,
    name: &str,
    gradient: &GradientValue,
    map: &TokenMap<'_>,
) -> Result<String, DtxError> {
    Ok(format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<shape xmlns:android="http://schemas.android.com/apk/res/android"
  android:shape="rectangle"
  name="{name}">
  <gradient
    android:angle="{angle}"
    android:startColor="{start}"
    android:centerColor="{center}"
    android:endColor="{end}"
    android:type="{kind}"/>
</shape>"#,
        name = name,
        angle = gradient_angle(gradient.from, gradient.to),
        start = stop_colour(token, 0, gradient, map)?,
        center = stop_colour(token, 1, gradient, map)?,
        end = stop_colour(token, 2, gradient, map)?,
        kind = gradient.kind,
    ))
}

fn two_stop_shape(
    token: &Token,
    name: &str,
    gradient: &GradientValue,
    map: &TokenMap<'_>,
) -> Result<String, DtxError> {
    Ok(format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<shape xmlns:android="http://schemas.android.com/apk/res/android"
    android:shape="rectangle"
    name="{name}">
    <gradient
      android:angle="{angle}"
      android:startColor="{start}"
      android:endColor="{end}"
      android:type="{kind}"/>
</shape>"#,
        name = name,
        angle = gradient_angle(gradient.from, gradient.to),
        start = stop_colour(token, 0, gradient, map)?,
        end = stop_colour(token, 1, gradient, map)?,
        kind = gradient.kind,
    ))
}
