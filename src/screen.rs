//! Generator screen state
//!
//! Holds what the single generator screen shows and reacts to its
//! controls. The actual widgets live in the front end; this type only
//! owns state and talks to the preference store and clipboard.

use crate::clipboard::ClipboardService;
use crate::config::GeneratorSettings;
use crate::generator::{self, HistoryLog};
use crate::preferences::{self, PreferenceStore};
use crate::types::{GeneratedPassword, GenerationConfig, GenerationMode, StrengthLevel, Theme};
use rand::Rng;

/// Shortest password for which the copy action is offered
pub const COPY_MIN_LENGTH: usize = 10;

/// Generator screen
pub struct GeneratorScreen<P: PreferenceStore, C: ClipboardService> {
    settings: GeneratorSettings,
    length: usize,
    include_digits: bool,
    include_special_chars: bool,
    mode: GenerationMode,
    is_generating: bool,
    current: Option<GeneratedPassword>,
    history: HistoryLog,
    theme: Theme,
    preferences: P,
    clipboard: C,
}

impl<P: PreferenceStore, C: ClipboardService> GeneratorScreen<P, C> {
    /// Create the screen, reading the stored theme once
    pub fn new(settings: GeneratorSettings, preferences: P, clipboard: C) -> Self {
        let theme = preferences::load_theme(&preferences);
        log::debug!("Screen opened with {} theme", theme.as_str());

        Self {
            length: settings.clamp_length(settings.default_length),
            include_digits: settings.include_digits,
            include_special_chars: settings.include_special_chars,
            mode: settings.mode,
            settings,
            is_generating: false,
            current: None,
            history: HistoryLog::new(),
            theme,
            preferences,
            clipboard,
        }
    }

    /// Move the length slider; out-of-range values are clamped
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = self.settings.clamp_length(length);
        self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_include_digits(&mut self, enabled: bool) {
        self.include_digits = enabled;
    }

    pub fn include_digits(&self) -> bool {
        self.include_digits
    }

    pub fn set_include_special_chars(&mut self, enabled: bool) {
        self.include_special_chars = enabled;
    }

    pub fn include_special_chars(&self) -> bool {
        self.include_special_chars
    }

    pub fn set_mode(&mut self, mode: GenerationMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Snapshot of the controls for one generation
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.length,
            mode: self.mode,
            include_digits: self.include_digits,
            include_special_chars: self.include_special_chars,
        }
    }

    /// Handle the generate action.
    ///
    /// Returns `None` when a generation is already running.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<GeneratedPassword> {
        if self.is_generating {
            log::debug!("Generate ignored, already generating");
            return None;
        }
        self.is_generating = true;

        let config = self.generation_config();
        let password = generator::generate(&config, rng);
        log::debug!(
            "Generated {} ({} chars, {})",
            config.mode.description(),
            password.len(),
            password.strength().as_str()
        );

        self.history.record(password.text());
        self.current = Some(password.clone());

        self.is_generating = false;
        Some(password)
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Whether the copy action is offered for the current password
    pub fn copy_visible(&self) -> bool {
        self.current
            .as_ref()
            .map_or(false, |password| password.len() >= COPY_MIN_LENGTH)
    }

    /// Handle the copy action.
    ///
    /// Returns whether the text reached the clipboard. Clipboard failures
    /// are logged and otherwise ignored.
    pub fn copy_current(&mut self) -> bool {
        if !self.copy_visible() {
            return false;
        }
        let Some(password) = self.current.as_ref() else {
            return false;
        };

        match self.clipboard.set_text(password.text()) {
            Ok(()) => {
                log::info!("📋 Password copied to clipboard");
                true
            }
            Err(e) => {
                log::warn!("Copy failed: {}", e);
                false
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Handle the dark mode toggle.
    ///
    /// The theme switches even if the preference cannot be written.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Theme {
        let theme = Theme::from_dark_mode(enabled);
        if let Err(e) = preferences::save_theme(&mut self.preferences, theme) {
            log::warn!("Could not persist theme: {}", e);
        }
        self.theme = theme;
        log::info!("🎨 Theme set to {}", theme.as_str());
        theme
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Read-only view of what the screen displays
    pub fn view(&self) -> ScreenView {
        ScreenView {
            password: self.current.as_ref().map(|p| p.text().to_string()),
            strength: self.current.as_ref().map(GeneratedPassword::strength),
            history: self.history.to_vec(),
            copy_visible: self.copy_visible(),
            theme: self.theme,
        }
    }
}

/// Displayed screen content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub password: Option<String>,
    pub strength: Option<StrengthLevel>,
    pub history: Vec<String>,
    pub copy_visible: bool,
    pub theme: Theme,
}

impl ScreenView {
    pub fn password_label(&self) -> String {
        format!("Password: {}", self.password.as_deref().unwrap_or(""))
    }

    pub fn strength_label(&self) -> String {
        match self.strength {
            Some(strength) => format!("Strength: {}", strength),
            None => "Strength: -".to_string(),
        }
    }

    pub fn history_text(&self) -> String {
        self.history.join("\n")
    }
}

impl std::fmt::Display for ScreenView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.password_label())?;
        writeln!(f, "{}", self.strength_label())?;
        if !self.history.is_empty() {
            writeln!(f, "History:")?;
            for entry in &self.history {
                writeln!(f, "  {}", entry)?;
            }
        }
        Ok(())
    }
}
