//! Password and PIN generation
//!
//! Generation draws every position independently. Random characters use a
//! two-stage draw: pick one of the enabled ranges uniformly, then pick a
//! character uniformly inside it. Small ranges (digits, specials) are
//! therefore over-represented compared to a flat draw over the alphabet.

pub mod charset;
pub mod history;
pub mod strength;

pub use charset::{enabled_ranges, CharRange};
pub use history::{record_history, HistoryLog, HISTORY_CAPACITY};
pub use strength::classify_strength;

use crate::types::{GeneratedPassword, GenerationConfig, GenerationMode};
use rand::Rng;

/// Generate one password or PIN.
///
/// A length of zero yields an empty password.
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> GeneratedPassword {
    let text: String = match config.mode {
        GenerationMode::NumericPin => (0..config.length).map(|_| draw_digit(rng)).collect(),
        GenerationMode::RandomCharacters => {
            let ranges = enabled_ranges(config);
            (0..config.length)
                .map(|_| draw_from_ranges(&ranges, rng))
                .collect()
        }
    };

    let strength = classify_strength(&text);
    GeneratedPassword::new(text, strength)
}

fn draw_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

fn draw_from_ranges<R: Rng + ?Sized>(ranges: &[CharRange], rng: &mut R) -> char {
    let range = &ranges[rng.gen_range(0..ranges.len())];
    rng.gen_range(range.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthLevel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_length_matches_config() {
        let mut rng = seeded();
        for length in [1, 4, 8, 12, 32] {
            for (digits, special) in [(false, false), (true, false), (false, true), (true, true)] {
                let config = GenerationConfig::random_characters(length, digits, special);
                assert_eq!(generate(&config, &mut rng).len(), length);
            }
            assert_eq!(generate(&GenerationConfig::pin(length), &mut rng).len(), length);
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut rng = seeded();
        let password = generate(&GenerationConfig::random_characters(0, true, true), &mut rng);
        assert!(password.is_empty());
        assert_eq!(password.strength(), StrengthLevel::Weak);
    }

    #[test]
    fn test_pin_is_digits_only() {
        let mut rng = seeded();
        for _ in 0..50 {
            let pin = generate(&GenerationConfig::pin(16), &mut rng);
            assert!(pin.text().chars().all(|c| c.is_ascii_digit()), "{}", pin);
        }
    }

    #[test]
    fn test_pin_ignores_class_toggles() {
        let mut rng = seeded();
        let mut config = GenerationConfig::pin(20);
        config.include_special_chars = true;
        let pin = generate(&config, &mut rng);
        assert!(pin.text().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_letters_only_without_toggles() {
        let mut rng = seeded();
        let config = GenerationConfig::random_characters(32, false, false);
        for _ in 0..50 {
            let password = generate(&config, &mut rng);
            assert!(password.text().chars().all(|c| c.is_ascii_alphabetic()), "{}", password);
        }
    }

    #[test]
    fn test_digits_appear_when_enabled() {
        let mut rng = seeded();
        let config = GenerationConfig::random_characters(32, true, false);
        let mut seen_digit = false;
        for _ in 0..20 {
            let password = generate(&config, &mut rng);
            assert!(password.text().chars().all(|c| c.is_ascii_alphanumeric()));
            seen_digit |= password.text().chars().any(|c| c.is_ascii_digit());
        }
        assert!(seen_digit);
    }

    #[test]
    fn test_specials_stay_in_range() {
        let mut rng = seeded();
        let config = GenerationConfig::random_characters(32, false, true);
        let mut seen_special = false;
        for _ in 0..20 {
            let password = generate(&config, &mut rng);
            for c in password.text().chars() {
                assert!(c.is_ascii_alphabetic() || ('!'..='/').contains(&c), "unexpected {:?}", c);
                seen_special |= ('!'..='/').contains(&c);
            }
        }
        assert!(seen_special);
    }

    #[test]
    fn test_same_seed_same_output() {
        let config = GenerationConfig::random_characters(24, true, true);
        let first = generate(&config, &mut StdRng::seed_from_u64(7));
        let second = generate(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);

        let pin_a = generate(&GenerationConfig::pin(10), &mut StdRng::seed_from_u64(7));
        let pin_b = generate(&GenerationConfig::pin(10), &mut StdRng::seed_from_u64(7));
        assert_eq!(pin_a.text(), pin_b.text());
    }

    #[test]
    fn test_strength_attached() {
        let mut rng = seeded();
        let password = generate(&GenerationConfig::random_characters(8, true, true), &mut rng);
        assert_eq!(password.strength(), classify_strength(password.text()));
    }

    #[test]
    fn test_two_stage_draw_favours_small_ranges() {
        // 4 ranges, so digits are drawn roughly a quarter of the time
        // rather than 10/77 of the time with a flat draw.
        let mut rng = seeded();
        let config = GenerationConfig::random_characters(10_000, true, true);
        let password = generate(&config, &mut rng);
        let digits = password.text().chars().filter(|c| c.is_ascii_digit()).count();
        assert!(digits > 2_000 && digits < 3_000, "digits = {}", digits);
    }
}
