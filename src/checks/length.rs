//! Length check - minimum character count.

use secrecy::{ExposeSecret, SecretString};

/// Default minimum length used by
/// [`validate_password`](crate::validate_password).
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in characters (Unicode scalar values), not bytes.
///
/// # Returns
/// `true` if the password has at least `min_length` characters.
pub fn check_length(password: &SecretString, min_length: usize) -> bool {
    password.expose_secret().chars().count() >= min_length
}
