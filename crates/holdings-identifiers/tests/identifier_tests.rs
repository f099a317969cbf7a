//! Identifier validation and comparison integration tests

use holdings_identifiers::{
    identifiers_match, is_valid_identifier, normalize_identifier, significant_length,
    validate_field, IdentifierKind,
};
use proptest::prelude::*;
use rstest::rstest;

// === Validation ===

#[rstest]
#[case(IdentifierKind::Issn, "0317-8471", true)]
#[case(IdentifierKind::Issn, "0317847X", true)]
#[case(IdentifierKind::EIssn, "0317-847", false)]
#[case(IdentifierKind::EIssn, "0317 8471", false)]
#[case(IdentifierKind::Isbn, "0-306-40615-2", true)]
#[case(IdentifierKind::Isbn, "978-0-321-12521-7", true)]
#[case(IdentifierKind::Isbn, "0317-8471", false)]
#[case(IdentifierKind::EIsbn, "978032112521", false)]
#[case(IdentifierKind::EIsbn, "978-0-321-12521-7 (pbk.)", false)]
fn test_identifier_shapes(#[case] kind: IdentifierKind, #[case] value: &str, #[case] valid: bool) {
    assert_eq!(is_valid_identifier(kind, value), valid, "{kind} {value:?}");
}

#[test]
fn test_issn_length_is_not_an_isbn_length() {
    // Eight characters is only ever a serial number
    assert!(is_valid_identifier(IdentifierKind::Issn, "12345678"));
    assert!(!is_valid_identifier(IdentifierKind::Isbn, "12345678"));
}

#[test]
fn test_hyphens_do_not_count() {
    assert_eq!(significant_length("--12-34-56-78--"), 8);
    assert!(is_valid_identifier(IdentifierKind::Issn, "--12-34-56-78--"));
}

// === Comparison ===

#[rstest]
#[case("0123-456X", "0123456Y", false)]
#[case("012345678", "01234567X", true)]
#[case("012345678", "01234568X", false)]
#[case("1234-5678", "12345678", true)]
#[case("1234-567x", "1234567X", true)]
#[case("12345678", "87654321", false)]
fn test_identifier_matching(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
    assert_eq!(identifiers_match(a, b), expected, "{a:?} vs {b:?}");
}

#[test]
fn test_first_string_pivot_wins_when_both_have_wildcards() {
    // The pivot is the first string's X only. With the first string's X at the
    // end, the second string's mid-string X is compared literally and fails.
    assert!(!identifiers_match("1234567X", "123X5678"));
    // Reversed, the pivot is index 3 and the trailing X meets the digit 8.
    assert!(!identifiers_match("123X5678", "1234567X"));
}

proptest! {
    #[test]
    fn test_match_is_reflexive(value in "[0-9xX-]{0,17}") {
        prop_assert!(identifiers_match(&value, &value));
    }

    #[test]
    fn test_match_ignores_hyphens(digits in "[0-9]{8}") {
        let hyphenated = format!("{}-{}", &digits[..4], &digits[4..]);
        prop_assert!(identifiers_match(&digits, &hyphenated));
    }

    #[test]
    fn test_trailing_wildcard_matches_any_check_digit(body in "[0-9]{7}", check in "[0-9]") {
        let concrete = format!("{body}{check}");
        let wildcard = format!("{body}X");
        prop_assert!(identifiers_match(&concrete, &wildcard));
        prop_assert!(identifiers_match(&wildcard, &concrete));
    }

    #[test]
    fn test_disallowed_characters_never_validate(
        prefix in "[0-9]{0,6}",
        bad in "[a-wyzA-WYZ ./:]",
        suffix in "[0-9]{0,6}",
    ) {
        let value = format!("{prefix}{bad}{suffix}");
        // Leading or trailing spaces are trimmed away before the charset check
        prop_assume!(!value.trim().chars().all(|c| c.is_ascii_digit()));
        for kind in IdentifierKind::ALL {
            prop_assert!(normalize_identifier(kind, &value).is_none());
        }
    }

    #[test]
    fn test_validation_is_idempotent(value in "[ 0-9xX-]{0,16}") {
        for kind in IdentifierKind::ALL {
            let mut once = Some(value.clone());
            validate_field(kind, &mut once);
            let mut twice = once.clone();
            validate_field(kind, &mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}
