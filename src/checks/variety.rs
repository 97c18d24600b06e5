//! Character variety checks - uppercase, lowercase, digits, special characters.

use secrecy::{ExposeSecret, SecretString};

/// The closed set of characters counted as special.
///
/// Whitespace and any punctuation outside this set (for example `"` and
/// `\`) do not qualify.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:',.<>?/~`";

/// Checks if the password contains at least one uppercase letter.
pub fn has_uppercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}

/// Checks if the password contains at least one lowercase letter.
pub fn has_lowercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}

/// Checks if the password contains at least one decimal digit.
pub fn has_digits(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains at least one character from
/// [`SPECIAL_CHARACTERS`].
pub fn has_special_chars(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
}
