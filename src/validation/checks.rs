//! Individual validation checks over a token document.

use std::collections::{HashMap, HashSet};

use crate::naming::{resolve_name, CaseStyle};
use crate::source::TokenDocument;
use crate::types::{find_group, ColourValue, TokenKind};

use super::warning::{Diagnostic, ValidationResult};

/// Every token's parent group, and every ancestor above it, must exist.
pub fn check_group_references(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in &doc.tokens {
        let mut group_id = token.parent_group_id.as_str();
        loop {
            let Some(group) = find_group(&doc.groups, group_id) else {
                result.push(
                    Diagnostic::error(
                        "dtx::validate::missing-group",
                        format!(
                            "token '{}' ({}) references missing group '{}'",
                            token.id, token.kind, group_id
                        ),
                    )
                    .with_help("Add the group to the token document".to_string()),
                );
                break;
            };
            match &group.parent_id {
                Some(parent_id) => group_id = parent_id,
                None => break,
            }
        }
    }

    result
}

/// Gradients must have exactly 2 or 3 stops.
pub fn check_gradient_shapes(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in &doc.tokens {
        if let Some(gradient) = token.gradient_value() {
            let stops = gradient.stops.len();
            if !(2..=3).contains(&stops) {
                result.push(Diagnostic::error(
                    "dtx::validate::gradient-stops",
                    format!("gradient '{}' has {} stop(s); only 2 or 3 render", token.id, stops),
                ));
            }
        }
    }

    result
}

fn colour_range_problem(value: &ColourValue) -> Option<String> {
    if value.reference.is_some() {
        // Ranges are checked on the referenced token itself.
        return None;
    }
    for (channel, raw) in [("r", value.r), ("g", value.g), ("b", value.b)] {
        if !(0..=255).contains(&raw) {
            return Some(format!("channel {}={} outside 0..=255", channel, raw));
        }
    }
    if !(0.0..=1.0).contains(&value.opacity) {
        return Some(format!("opacity {} outside 0.0..=1.0", value.opacity));
    }
    None
}

/// Channels and opacity must be in range, gradient stops included.
pub fn check_colour_ranges(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut report = |token_id: &str, problem: String| {
        result.push(Diagnostic::error(
            "dtx::validate::colour-range",
            format!("token '{}': {}", token_id, problem),
        ));
    };

    for token in &doc.tokens {
        if let Some(value) = token.colour_value() {
            if let Some(problem) = colour_range_problem(value) {
                report(&token.id, problem);
            }
        }
        if let Some(gradient) = token.gradient_value() {
            for (i, stop) in gradient.stops.iter().enumerate() {
                if let Some(problem) = colour_range_problem(&stop.colour) {
                    report(&token.id, format!("stop {}: {}", i, problem));
                }
            }
        }
    }

    result
}

/// Colour references must point at existing colour tokens.
pub fn check_colour_references(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    let by_id: HashMap<&str, &TokenKind> = doc
        .tokens
        .iter()
        .map(|t| (t.id.as_str(), &t.kind))
        .collect();

    let mut check = |token_id: &str, value: &ColourValue| {
        let Some(reference) = &value.reference else {
            return;
        };
        match by_id.get(reference.as_str()) {
            None => result.push(Diagnostic::error(
                "dtx::validate::dangling-reference",
                format!("token '{}' references unknown token '{}'", token_id, reference),
            )),
            Some(TokenKind::Colour) => {}
            Some(kind) => result.push(Diagnostic::error(
                "dtx::validate::dangling-reference",
                format!(
                    "token '{}' references '{}' which is a {} token, not a colour",
                    token_id, reference, kind
                ),
            )),
        }
    };

    for token in &doc.tokens {
        if let Some(value) = token.colour_value() {
            check(&token.id, value);
        }
        if let Some(gradient) = token.gradient_value() {
            for stop in &gradient.stops {
                check(&token.id, &stop.colour);
            }
        }
    }

    result
}

/// No two tokens of the same kind may resolve to the same name.
///
/// This is the injectivity guarantee the generators rely on: a collision
/// means two tokens would write the same resource line or colorset path.
pub fn check_duplicate_names(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (kind, case) in [
        (TokenKind::Colour, CaseStyle::Camel),
        (TokenKind::Colour, CaseStyle::Snake),
        (TokenKind::Dimension, CaseStyle::Snake),
        (TokenKind::Gradient, CaseStyle::Snake),
    ] {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for token in doc.tokens.iter().filter(|t| t.kind == kind) {
            // Unresolvable groups are reported by check_group_references.
            let Ok(name) = resolve_name(token, &doc.groups, case) else {
                continue;
            };
            if let Some(first) = seen.get(&name) {
                result.push(Diagnostic::error(
                    "dtx::validate::duplicate-name",
                    format!(
                        "{} tokens '{}' and '{}' both resolve to '{}'",
                        kind, first, token.id, name
                    ),
                ));
            } else {
                seen.insert(name, token.id.as_str());
            }
        }
    }

    result
}

/// Theme overrides should target tokens that exist.
pub fn check_theme_overrides(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    let ids: HashSet<&str> = doc.tokens.iter().map(|t| t.id.as_str()).collect();
    for theme in &doc.themes {
        let mut overridden: Vec<&String> = theme.overrides.keys().collect();
        overridden.sort();
        for token_id in overridden {
            if !ids.contains(token_id.as_str()) {
                result.push(Diagnostic::warning(
                    "dtx::validate::unknown-override",
                    format!(
                        "theme '{}' overrides unknown token '{}'",
                        theme.name, token_id
                    ),
                ));
            }
        }
    }

    result
}

/// An empty document exports nothing useful.
pub fn check_empty(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    if doc.tokens.is_empty() {
        result.push(Diagnostic::warning(
            "dtx::validate::empty",
            "token document contains no tokens",
        ));
    }

    result
}
