//! Validation report types.

/// Score at or above which a password is considered strong.
pub const STRONG_THRESHOLD: u8 = 70;

/// Score at or above which a password is considered of medium strength.
pub const MEDIUM_THRESHOLD: u8 = 50;

/// Coarse strength band derived from the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PasswordStrength {
    /// Score below [`MEDIUM_THRESHOLD`].
    Weak,
    /// Score in `MEDIUM_THRESHOLD..STRONG_THRESHOLD`.
    Medium,
    /// Score at or above [`STRONG_THRESHOLD`].
    Strong,
}

impl PasswordStrength {
    /// Maps a strength score to its band.
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            PasswordStrength::Strong
        } else if score >= MEDIUM_THRESHOLD {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }
}

/// Full validation report for a single password.
///
/// Every field is derived from the password alone, so equal inputs always
/// produce equal reports. Constructed by
/// [`validate_password`](crate::validate_password).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// Password has at least [`DEFAULT_MIN_LENGTH`](crate::DEFAULT_MIN_LENGTH)
    /// characters.
    pub valid_length: bool,
    /// At least one uppercase letter.
    pub has_uppercase: bool,
    /// At least one lowercase letter.
    pub has_lowercase: bool,
    /// At least one decimal digit.
    pub has_digits: bool,
    /// At least one character from
    /// [`SPECIAL_CHARACTERS`](crate::SPECIAL_CHARACTERS).
    pub has_special_chars: bool,
    /// No common weak pattern occurs in the lower-cased password.
    pub no_common_patterns: bool,
    /// Weighted-sum strength score, 0 to 100.
    pub strength_score: u8,
    /// Final verdict: `strength_score >= STRONG_THRESHOLD`.
    pub is_strong: bool,
}

impl ValidationReport {
    /// Returns the strength band for this report's score.
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.strength_score)
    }
}
