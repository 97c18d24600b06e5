//! Password strength analysis library
//!
//! This library analyzes a password against a fixed set of composition
//! rules and produces a 0-100 strength score together with a structured
//! validation report.
//!
//! # Features
//!
//! - `serde`: Enables serialization of the validation report
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::validate_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = validate_password(&password);
//!
//! println!("Score: {}", report.strength_score);
//! println!("Strength: {:?}", report.strength());
//! ```

// Re-export report types for convenience
pub use report::{MEDIUM_THRESHOLD, PasswordStrength, STRONG_THRESHOLD, ValidationReport};

// Internal modules
mod analyzer;
mod checks;
mod report;

// Public API
pub use analyzer::{calculate_strength_score, validate_password};
pub use checks::{
    COMMON_PATTERNS, DEFAULT_MIN_LENGTH, SPECIAL_CHARACTERS, check_common_patterns, check_length,
    has_digits, has_lowercase, has_special_chars, has_uppercase,
};
