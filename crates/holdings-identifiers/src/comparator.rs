//! Wildcard-tolerant identifier comparison
//!
//! Catalogs frequently disagree on the final check character of an ISSN or
//! ISBN, and some record it as `X` when it is unknown. Two identifiers match
//! when they are equal after dropping hyphens, or when they differ only at the
//! position of an `X` in one of them.

/// The wildcard check character after case folding.
pub const WILDCARD: char = 'X';

/// Canonical comparison form: trimmed, hyphens removed, `x` upper-cased.
pub fn canonical_form(value: &str) -> Vec<char> {
    value
        .trim()
        .chars()
        .filter(|c| *c != '-')
        .map(|c| if c == 'x' { WILDCARD } else { c })
        .collect()
}

/// Decide whether two identifier strings denote the same value.
///
/// When the canonical forms differ and the first string contains an `X`, the
/// character at that index is skipped in both strings. Only if the first has
/// no `X` is the second string's `X` used instead; the pivot is never taken
/// from both at once. The character skipped in the other string must itself
/// be a digit or `X`.
///
/// Absence is not special-cased: two empty strings match.
///
/// # Examples
/// ```
/// use holdings_identifiers::identifiers_match;
/// assert!(identifiers_match("0317-8471", "03178471"));
/// assert!(identifiers_match("1234-5678", "1234-567x"));
/// assert!(!identifiers_match("1234-5678", "1234-5679"));
/// ```
pub fn identifiers_match(a: &str, b: &str) -> bool {
    let a = canonical_form(a);
    let b = canonical_form(b);

    if a == b {
        return true;
    }

    let pivot = match wildcard_index(&a).or_else(|| wildcard_index(&b)) {
        Some(pivot) => pivot,
        None => return false,
    };

    for other in [&a, &b] {
        if let Some(&c) = other.get(pivot) {
            if !is_check_character(c) {
                return false;
            }
        }
    }

    without_index(&a, pivot) == without_index(&b, pivot)
}

/// Compare two optional identifier fields, treating absence as the empty string.
pub fn optional_identifiers_match(a: Option<&str>, b: Option<&str>) -> bool {
    identifiers_match(a.unwrap_or(""), b.unwrap_or(""))
}

fn wildcard_index(chars: &[char]) -> Option<usize> {
    chars.iter().position(|&c| c == WILDCARD)
}

fn is_check_character(c: char) -> bool {
    c.is_ascii_digit() || c == WILDCARD
}

fn without_index(chars: &[char], index: usize) -> Vec<char> {
    chars
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, &c)| c)
        .collect()
}
