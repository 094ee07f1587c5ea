//! Preference storage
//!
//! Holds the small set of values that survive restarts. Today that is only
//! the dark mode flag.

use crate::error::{AppError, Result};
use crate::types::Theme;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key of the dark mode flag
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Durable key/value storage scoped to the application
pub trait PreferenceStore {
    /// Read a flag, falling back to `default` when absent
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Write a flag
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

/// Preference store backed by a pretty-printed JSON file
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonPreferenceStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// reported and replaced on the next write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
                Map::new()
            }
        };

        Self { path, values }
    }

    /// `<platform config dir>/passgen/preferences.json`
    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "passgen", "passgen")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
            .ok_or_else(|| AppError::preference("could not determine config directory"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> Result<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(values) => Ok(values),
            _ => Err(AppError::preference("preferences file is not a JSON object")),
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), Value::Bool(value));
        self.save()
    }
}

/// In-memory preference store, lost on exit
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, bool>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Theme stored in `store`, light when never set
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> Theme {
    Theme::from_dark_mode(store.get_bool(DARK_MODE_KEY, false))
}

/// Persist the dark mode flag
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &mut S, theme: Theme) -> Result<()> {
    store.set_bool(DARK_MODE_KEY, theme.is_dark())
}
