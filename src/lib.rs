//! Passgen
//!
//! Random password and PIN generator:
//! - letters with optional digits and special characters, or numeric PINs
//! - weak / medium / strong rating
//! - rolling history of the last five results
//! - persisted dark mode preference

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod preferences;
pub mod screen;
pub mod types;
pub mod ui;

// Re-export common types
pub use crate::config::{AppConfig, GeneratorSettings};
pub use error::{AppError, Result};
pub use generator::{classify_strength, generate, record_history, HistoryLog};
pub use screen::{GeneratorScreen, ScreenView};
pub use types::{GeneratedPassword, GenerationConfig, GenerationMode, StrengthLevel, Theme};
