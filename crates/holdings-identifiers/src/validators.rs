//! Identifier validation functions

use crate::IdentifierKind;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digits, the X check character (either case) and hyphen separators
    static ref IDENTIFIER_CHARSET: Regex = Regex::new(r"^[0-9xX-]*$").unwrap();
}

/// Count the significant characters of an identifier (digits and `X`/`x`).
pub fn significant_length(value: &str) -> usize {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'x' || *c == 'X')
        .count()
}

/// Check whether `value` is a well-formed identifier of the given kind.
///
/// The trimmed value may only contain digits, `x`/`X` and `-`, and once the
/// hyphens are dropped it must have one of the lengths allowed for `kind`
/// (8 for serials, 10 or 13 for books). Check digits are not verified.
///
/// # Examples
/// ```
/// use holdings_identifiers::{is_valid_identifier, IdentifierKind};
/// assert!(is_valid_identifier(IdentifierKind::Issn, "0317-8471"));
/// assert!(is_valid_identifier(IdentifierKind::Isbn, "0-306-40615-X"));
/// assert!(!is_valid_identifier(IdentifierKind::Issn, "ISSN 0317-8471"));
/// ```
pub fn is_valid_identifier(kind: IdentifierKind, value: &str) -> bool {
    let trimmed = value.trim();
    if !IDENTIFIER_CHARSET.is_match(trimmed) {
        return false;
    }

    kind.valid_lengths().contains(&significant_length(trimmed))
}

/// Normalize a raw identifier cell.
///
/// Returns `None` for empty or malformed input, otherwise the trimmed value
/// with its original hyphenation and case.
pub fn normalize_identifier(kind: IdentifierKind, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !is_valid_identifier(kind, trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Validate an optional identifier field in place.
///
/// Clears the field when its value is malformed and returns `true` if it did.
/// Absent fields are left alone, so running this twice is a no-op.
pub fn validate_field(kind: IdentifierKind, field: &mut Option<String>) -> bool {
    let Some(value) = field.as_deref() else {
        return false;
    };

    match normalize_identifier(kind, value) {
        Some(normalized) => {
            if normalized != value {
                *field = Some(normalized);
            }
            false
        }
        None => {
            *field = None;
            true
        }
    }
}
