//! Identifier resolution.
//!
//! Turns a token's position in the group tree into a deterministic,
//! platform-safe variable name. The path is the chain of non-root ancestor
//! group names (root-first) followed by the token's own name; segments are
//! split into words and re-joined in the requested case style.

use crate::error::{DtxError, Result};
use crate::types::{find_group, Token, TokenGroup};

/// Case style for resolved identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `font_size_large` — Android resources, gradient drawables, SCSS.
    Snake,
    /// `fontSizeLarge` — tvOS colorsets, Roku constants.
    Camel,
}

/// Resolve a token's platform-safe identifier.
///
/// Fails with `MissingGroup` when the token's parent group, or any ancestor
/// in its chain, is absent from `groups`. There is deliberately no fallback
/// name for that case.
pub fn resolve_name(token: &Token, groups: &[TokenGroup], case: CaseStyle) -> Result<String> {
    let parent = find_group(groups, &token.parent_group_id)
        .ok_or_else(|| DtxError::missing_group(&token.id, &token.parent_group_id))?;

    // Walk up to the root, collecting path segments parent-first.
    let mut segments: Vec<&str> = Vec::new();
    let mut group = parent;
    loop {
        if !group.is_root {
            segments.push(group.name.as_str());
        }
        match &group.parent_id {
            None => break,
            Some(parent_id) => {
                group = find_group(groups, parent_id)
                    .ok_or_else(|| DtxError::missing_group(&token.id, parent_id))?;
            }
        }
    }
    segments.reverse();

    let mut parts: Vec<String> = Vec::new();
    for segment in segments {
        parts.extend(words(segment));
    }
    parts.extend(words(&token.name));

    let mut name = match case {
        CaseStyle::Snake => parts.join("_"),
        CaseStyle::Camel => {
            let mut out = String::new();
            for (i, word) in parts.iter().enumerate() {
                if i == 0 {
                    out.push_str(word);
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
    };

    // Identifiers must not start with a digit on any target platform.
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    Ok(name)
}

/// Split a path segment into lowercase words.
///
/// Word boundaries are any non-alphanumeric character and lower-to-upper
/// case transitions; everything unsafe for identifiers is dropped.
fn words(segment: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in segment.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
