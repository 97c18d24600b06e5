//! Common pattern check - detects well-known weak substrings.

use secrecy::{ExposeSecret, SecretString};

/// Substrings considered weak when found anywhere in the lower-cased
/// password.
pub const COMMON_PATTERNS: [&str; 6] = ["123", "abc", "password", "qwerty", "111", "000"];

/// Checks the password against the list of common weak patterns.
///
/// Matching is case-insensitive: the whole password is lower-cased before
/// the substring search.
///
/// # Returns
/// `true` if the password is safe (no pattern found), `false` if any
/// pattern occurs.
pub fn check_common_patterns(password: &SecretString) -> bool {
    let lowered = password.expose_secret().to_lowercase();
    !COMMON_PATTERNS.iter().any(|pattern| lowered.contains(pattern))
}
