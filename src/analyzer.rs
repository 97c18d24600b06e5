//! Password analyzer - strength scoring and report assembly.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{
    DEFAULT_MIN_LENGTH, check_common_patterns, check_length, has_digits, has_lowercase,
    has_special_chars, has_uppercase,
};
use crate::report::{STRONG_THRESHOLD, ValidationReport};

/// Calculates the overall strength score of the password (0-100).
///
/// The score is a deterministic weighted sum over the composition checks:
/// up to 30 points from length tiers (8, 12 and 16 characters), 15 points
/// per character class present, and 10 points when no common weak pattern
/// is found. The result is clamped to 100.
///
/// An empty password scores 0 with no other points awarded.
pub fn calculate_strength_score(password: &SecretString) -> u8 {
    let char_count = password.expose_secret().chars().count();
    if char_count == 0 {
        return 0;
    }

    let mut score: u8 = 0;

    // Length tiers, cumulative (max 30)
    if char_count >= 8 {
        score += 10;
    }
    if char_count >= 12 {
        score += 10;
    }
    if char_count >= 16 {
        score += 10;
    }

    // Character variety: 15 points per class (max 60)
    if has_uppercase(password) {
        score += 15;
    }
    if has_lowercase(password) {
        score += 15;
    }
    if has_digits(password) {
        score += 15;
    }
    if has_special_chars(password) {
        score += 15;
    }

    // Pattern check (10 points)
    if check_common_patterns(password) {
        score += 10;
    }

    score.min(100)
}

/// Combines all checks into a comprehensive [`ValidationReport`].
///
/// The report carries the outcome of every individual check, the strength
/// score, and the final verdict: `is_strong` is `true` from a score of
/// [`STRONG_THRESHOLD`] upward.
pub fn validate_password(password: &SecretString) -> ValidationReport {
    let strength_score = calculate_strength_score(password);

    let report = ValidationReport {
        valid_length: check_length(password, DEFAULT_MIN_LENGTH),
        has_uppercase: has_uppercase(password),
        has_lowercase: has_lowercase(password),
        has_digits: has_digits(password),
        has_special_chars: has_special_chars(password),
        no_common_patterns: check_common_patterns(password),
        strength_score,
        is_strong: strength_score >= STRONG_THRESHOLD,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password validated: score {}, strong: {}",
        report.strength_score,
        report.is_strong
    );

    report
}
