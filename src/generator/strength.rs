//! Strength classification

use crate::types::StrengthLevel;

/// Minimum length for a strong password
pub const STRONG_MIN_LENGTH: usize = 12;

/// Minimum length for a medium password
pub const MEDIUM_MIN_LENGTH: usize = 10;

/// Classify a password.
///
/// Strong needs at least 12 characters, a digit and a character that is
/// neither a letter nor a digit. Anything else with at least 10 characters
/// is medium. Lengths are counted in chars.
pub fn classify_strength(password: &str) -> StrengthLevel {
    let length = password.chars().count();
    let has_digit = password.chars().any(is_digit);
    let has_symbol = password.chars().any(|c| !(is_letter(c) || is_digit(c)));

    if length >= STRONG_MIN_LENGTH && has_digit && has_symbol {
        StrengthLevel::Strong
    } else if length >= MEDIUM_MIN_LENGTH {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    }
}

/// Decimal digits only; `½` or `²` are not digits.
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Alphabetic but not numeric, so letter numbers such as `Ⅻ` are symbols.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
