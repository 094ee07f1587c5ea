//! Shared type definitions

use serde::{Deserialize, Serialize};

/// Generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Letters plus the enabled optional classes
    #[default]
    RandomCharacters,
    /// Decimal digits only
    NumericPin,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::RandomCharacters => "random_characters",
            GenerationMode::NumericPin => "numeric_pin",
        }
    }

    /// Human readable label
    pub fn description(&self) -> &'static str {
        match self {
            GenerationMode::RandomCharacters => "Password",
            GenerationMode::NumericPin => "PIN",
        }
    }
}

/// Options for a single generation request.
///
/// Built fresh from the screen state at every generate action and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of characters to produce
    pub length: usize,
    /// Generation mode
    pub mode: GenerationMode,
    /// Add the `0..=9` range (ignored for PINs)
    pub include_digits: bool,
    /// Add the `!..=/` range (ignored for PINs)
    pub include_special_chars: bool,
}

impl GenerationConfig {
    /// Random characters configuration
    pub fn random_characters(length: usize, include_digits: bool, include_special_chars: bool) -> Self {
        Self {
            length,
            mode: GenerationMode::RandomCharacters,
            include_digits,
            include_special_chars,
        }
    }

    /// Numeric PIN configuration
    pub fn pin(length: usize) -> Self {
        Self {
            length,
            mode: GenerationMode::NumericPin,
            include_digits: false,
            include_special_chars: false,
        }
    }
}

/// Coarse password strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }

    /// Label shown next to the password
    pub fn description(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A generated password and its strength
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    text: String,
    strength: StrengthLevel,
}

impl GeneratedPassword {
    pub(crate) fn new(text: String, strength: StrengthLevel) -> Self {
        Self { text, strength }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn strength(&self) -> StrengthLevel {
        self.strength
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(enabled: bool) -> Self {
        if enabled {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_constructors() {
        let config = GenerationConfig::random_characters(12, true, false);
        assert_eq!(config.mode, GenerationMode::RandomCharacters);
        assert!(config.include_digits);
        assert!(!config.include_special_chars);

        let pin = GenerationConfig::pin(4);
        assert_eq!(pin.mode, GenerationMode::NumericPin);
        assert_eq!(pin.length, 4);
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&GenerationMode::NumericPin).unwrap();
        assert_eq!(json, "\"numeric_pin\"");

        let mode: GenerationMode = serde_json::from_str("\"random_characters\"").unwrap();
        assert_eq!(mode, GenerationMode::RandomCharacters);
        assert_eq!(mode.as_str(), "random_characters");
    }

    #[test]
    fn test_strength_ordering_and_labels() {
        assert!(StrengthLevel::Weak < StrengthLevel::Medium);
        assert!(StrengthLevel::Medium < StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Strong.to_string(), "Strong");
        assert_eq!(StrengthLevel::Weak.as_str(), "weak");
    }

    #[test]
    fn test_theme_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }
}
