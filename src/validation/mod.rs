//! Validation system for token documents.
//!
//! Runs a suite of checks against a loaded document and reports errors and
//! warnings. Used by `dtx validate` and before `dtx export`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::source::TokenDocument;

/// Run all validation checks against the document.
pub fn validate_document(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty(doc));
    result.merge(checks::check_group_references(doc));
    result.merge(checks::check_gradient_shapes(doc));
    result.merge(checks::check_colour_ranges(doc));
    result.merge(checks::check_colour_references(doc));
    result.merge(checks::check_duplicate_names(doc));
    result.merge(checks::check_theme_overrides(doc));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}", d);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColourValue, Token, TokenGroup, TokenKind, TokenValue};

    #[test]
    fn test_validate_empty_document() {
        let doc = TokenDocument::default();
        let result = validate_document(&doc);
        // Empty is a warning, not an error.
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_validate_valid_document() {
        let doc = TokenDocument {
            tokens: vec![Token {
                id: "t1".to_string(),
                name: "Primary".to_string(),
                kind: TokenKind::Colour,
                parent_group_id: "root".to_string(),
                value: TokenValue::Colour(ColourValue::opaque(1, 2, 3)),
            }],
            groups: vec![TokenGroup::root("root", "Color")],
            themes: vec![],
        };

        let result = validate_document(&doc);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_catches_missing_group() {
        let doc = TokenDocument {
            tokens: vec![Token {
                id: "t1".to_string(),
                name: "Primary".to_string(),
                kind: TokenKind::Colour,
                parent_group_id: "nowhere".to_string(),
                value: TokenValue::Colour(ColourValue::opaque(1, 2, 3)),
            }],
            groups: vec![],
            themes: vec![],
        };

        let result = validate_document(&doc);
        assert!(result.has_errors());
    }
}
