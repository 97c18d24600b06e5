//! Password composition checks
//!
//! Each check inspects a single aspect of the password. All checks are
//! total: any input, including the empty string, yields a plain boolean.

mod length;
mod pattern;
mod variety;

pub use length::{DEFAULT_MIN_LENGTH, check_length};
pub use pattern::{COMMON_PATTERNS, check_common_patterns};
pub use variety::{
    SPECIAL_CHARACTERS, has_digits, has_lowercase, has_special_chars, has_uppercase,
};
