//! Property-based tests for the password analyzer.

use proptest::prelude::*;
use pwd_analyzer::{
    COMMON_PATTERNS, STRONG_THRESHOLD, calculate_strength_score, check_common_patterns,
    check_length, has_digits, has_lowercase, has_special_chars, has_uppercase, validate_password,
};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

proptest! {
    // ========================
    // Score Properties
    // ========================

    #[test]
    fn score_is_bounded(s in "\\PC*") {
        let score = calculate_strength_score(&secret(&s));
        prop_assert!(score <= 100, "score {} out of bounds for {:?}", score, s);
    }

    #[test]
    fn score_never_panics_on_any_input(s in "\\PC*") {
        let _ = calculate_strength_score(&secret(&s));
        let _ = validate_password(&secret(&s));
    }

    #[test]
    fn adding_a_digit_never_lowers_the_score(s in "[A-Za-z@#!%^&* ]{0,24}") {
        let before = calculate_strength_score(&secret(&s));
        let extended = format!("{}7", s);
        let after = calculate_strength_score(&secret(&extended));
        prop_assert!(after >= before, "{} -> {} for {:?}", before, after, extended);
    }

    #[test]
    fn adding_a_special_char_never_lowers_the_score(s in "[A-Za-z0-9]{0,24}") {
        let before = calculate_strength_score(&secret(&s));
        let extended = format!("{}%", s);
        let after = calculate_strength_score(&secret(&extended));
        prop_assert!(after >= before, "{} -> {} for {:?}", before, after, extended);
    }

    #[test]
    fn adding_an_uppercase_letter_never_lowers_the_score(s in "[a-z0-9!@#]{0,24}") {
        let before = calculate_strength_score(&secret(&s));
        let extended = format!("{}Q", s);
        let after = calculate_strength_score(&secret(&extended));
        prop_assert!(after >= before, "{} -> {} for {:?}", before, after, extended);
    }

    // ========================
    // Check Properties
    // ========================

    #[test]
    fn check_length_matches_char_count(s in "\\PC*", min in 0usize..64) {
        let expected = s.chars().count() >= min;
        prop_assert_eq!(check_length(&secret(&s), min), expected);
    }

    #[test]
    fn pattern_check_matches_substring_search(s in "\\PC*") {
        let lowered = s.to_lowercase();
        let expected = !COMMON_PATTERNS.iter().any(|p| lowered.contains(p));
        prop_assert_eq!(check_common_patterns(&secret(&s)), expected);
    }

    // ========================
    // Report Properties
    // ========================

    #[test]
    fn validate_password_is_idempotent(s in "\\PC*") {
        let pwd = secret(&s);
        prop_assert_eq!(validate_password(&pwd), validate_password(&pwd));
    }

    #[test]
    fn report_agrees_with_standalone_checks(s in "\\PC*") {
        let pwd = secret(&s);
        let report = validate_password(&pwd);

        prop_assert_eq!(report.has_uppercase, has_uppercase(&pwd));
        prop_assert_eq!(report.has_lowercase, has_lowercase(&pwd));
        prop_assert_eq!(report.has_digits, has_digits(&pwd));
        prop_assert_eq!(report.has_special_chars, has_special_chars(&pwd));
        prop_assert_eq!(report.no_common_patterns, check_common_patterns(&pwd));
        prop_assert_eq!(report.strength_score, calculate_strength_score(&pwd));
        prop_assert_eq!(report.is_strong, report.strength_score >= STRONG_THRESHOLD);
    }
}
