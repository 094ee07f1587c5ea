//! Settings management

use crate::error::Result;
use crate::types::GenerationMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

/// Environment variable prefix, e.g. `PASSGEN_GENERATOR__MAX_LENGTH=40`
pub const ENV_PREFIX: &str = "PASSGEN";

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Generator defaults and slider bounds
    #[validate]
    pub generator: GeneratorSettings,
    /// Preference store settings
    pub preferences: PreferencesSettings,
}

/// Generator defaults and slider bounds
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_length_bounds"))]
pub struct GeneratorSettings {
    /// Initial slider position
    #[validate(range(min = 1, max = 128))]
    pub default_length: usize,
    /// Smallest selectable length
    #[validate(range(min = 1, max = 128))]
    pub min_length: usize,
    /// Largest selectable length
    #[validate(range(min = 1, max = 128))]
    pub max_length: usize,
    pub include_digits: bool,
    pub include_special_chars: bool,
    pub mode: GenerationMode,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_length: 8,
            min_length: 4,
            max_length: 32,
            include_digits: false,
            include_special_chars: false,
            mode: GenerationMode::RandomCharacters,
        }
    }
}

impl GeneratorSettings {
    /// Clamp a requested length into the slider bounds.
    ///
    /// Inverted bounds do not panic; `max_length` wins.
    pub fn clamp_length(&self, length: usize) -> usize {
        length.max(self.min_length).min(self.max_length)
    }
}

fn validate_length_bounds(settings: &GeneratorSettings) -> std::result::Result<(), ValidationError> {
    if settings.min_length > settings.max_length {
        let mut err = ValidationError::new("length_bounds");
        err.message = Some("min_length must not exceed max_length".into());
        return Err(err);
    }
    if settings.default_length < settings.min_length || settings.default_length > settings.max_length {
        let mut err = ValidationError::new("default_length");
        err.message = Some("default_length must lie within min_length..=max_length".into());
        return Err(err);
    }
    Ok(())
}

/// Preference store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesSettings {
    /// Preference file; the platform config directory is used when unset
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load settings from defaults, an optional file and the environment.
    ///
    /// An explicitly given file must exist. Environment variables use the
    /// `PASSGEN_` prefix and `__` between nested keys.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            log::info!("📖 Loading settings file: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check setting consistency
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.default_length, 8);
        assert_eq!(config.generator.mode, GenerationMode::RandomCharacters);
        assert!(config.preferences.path.is_none());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = AppConfig::default();
        config.generator.min_length = 20;
        config.generator.max_length = 10;
        config.generator.default_length = 15;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_outside_bounds_rejected() {
        let mut config = AppConfig::default();
        config.generator.default_length = 64;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut config = AppConfig::default();
        config.generator.min_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_length() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.clamp_length(1), 4);
        assert_eq!(settings.clamp_length(16), 16);
        assert_eq!(settings.clamp_length(100), 32);
    }

    #[test]
    fn test_clamp_length_with_inverted_bounds() {
        let settings = GeneratorSettings {
            min_length: 20,
            max_length: 10,
            ..GeneratorSettings::default()
        };
        assert_eq!(settings.clamp_length(1), 10);
        assert_eq!(settings.clamp_length(15), 10);
        assert_eq!(settings.clamp_length(64), 10);
    }

    #[test]
    fn test_load_applies_env_overrides() -> Result<()> {
        // Values agree with test_load_from_file since tests share the process env
        std::env::set_var("PASSGEN_GENERATOR__MAX_LENGTH", "40");
        std::env::set_var("PASSGEN_GENERATOR__INCLUDE_DIGITS", "true");

        let loaded = AppConfig::load(None);

        std::env::remove_var("PASSGEN_GENERATOR__MAX_LENGTH");
        std::env::remove_var("PASSGEN_GENERATOR__INCLUDE_DIGITS");

        let config = loaded?;
        assert_eq!(config.generator.max_length, 40);
        assert!(config.generator.include_digits);
        assert_eq!(config.generator.min_length, 4);
        assert_eq!(config.generator.default_length, 8);
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            r#"
[generator]
default_length = 16
max_length = 40
include_digits = true
mode = "numeric_pin"

[preferences]
path = "/tmp/passgen-prefs.json"
"#
        )?;

        let config = AppConfig::load(Some(file.path()))?;
        assert_eq!(config.generator.default_length, 16);
        assert_eq!(config.generator.max_length, 40);
        assert_eq!(config.generator.min_length, 4);
        assert!(config.generator.include_digits);
        assert_eq!(config.generator.mode, GenerationMode::NumericPin);
        assert_eq!(
            config.preferences.path.as_deref(),
            Some(Path::new("/tmp/passgen-prefs.json"))
        );
        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[generator]\ndefault_length = 100\nmax_length = 32")?;

        assert!(AppConfig::load(Some(file.path())).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let missing = Path::new("/nonexistent/passgen/settings.toml");
        assert!(AppConfig::load(Some(missing)).is_err());
    }
}
