//! Character ranges used as draw pools

use crate::types::{GenerationConfig, GenerationMode};
use std::ops::RangeInclusive;

/// A contiguous block of characters drawn from as one pool
pub type CharRange = RangeInclusive<char>;

pub const LOWERCASE: CharRange = 'a'..='z';
pub const UPPERCASE: CharRange = 'A'..='Z';
pub const DIGITS: CharRange = '0'..='9';
/// `!"#$%&'()*+,-./`
pub const SPECIAL: CharRange = '!'..='/';

/// Ranges enabled by a configuration.
///
/// Letters are always present for random characters; a PIN only ever
/// draws from `DIGITS`. The result is never empty.
pub fn enabled_ranges(config: &GenerationConfig) -> Vec<CharRange> {
    match config.mode {
        GenerationMode::NumericPin => vec![DIGITS],
        GenerationMode::RandomCharacters => {
            let mut ranges = vec![LOWERCASE, UPPERCASE];
            if config.include_digits {
                ranges.push(DIGITS);
            }
            if config.include_special_chars {
                ranges.push(SPECIAL);
            }
            ranges
        }
    }
}

/// Whether `c` falls in any of `ranges`
pub fn contains(ranges: &[CharRange], c: char) -> bool {
    ranges.iter().any(|range| range.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_always_enabled() {
        let ranges = enabled_ranges(&GenerationConfig::random_characters(8, false, false));
        assert_eq!(ranges, vec![LOWERCASE, UPPERCASE]);
    }

    #[test]
    fn test_optional_ranges() {
        let ranges = enabled_ranges(&GenerationConfig::random_characters(8, true, true));
        assert_eq!(ranges.len(), 4);
        assert!(contains(&ranges, '5'));
        assert!(contains(&ranges, '/'));
        assert!(!contains(&ranges, '@'));
    }

    #[test]
    fn test_pin_ranges() {
        let ranges = enabled_ranges(&GenerationConfig::pin(4));
        assert_eq!(ranges, vec![DIGITS]);
    }

    #[test]
    fn test_special_range_members() {
        let members: String = SPECIAL.collect();
        assert_eq!(members, "!\"#$%&'()*+,-./");
    }
}
