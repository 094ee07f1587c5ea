//! Subcommand implementations

use crate::cli::GenerateArgs;
use crate::clipboard::ClipboardService;
use crate::config::GeneratorSettings;
use crate::generator::classify_strength;
use crate::preferences::{self, MemoryPreferenceStore, PreferenceStore};
use crate::screen::{GeneratorScreen, COPY_MIN_LENGTH};
use crate::types::{GenerationMode, Theme};
use crate::ui::format_password;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{self, Write};

/// `generate`: print `count` results, then history and copy status
pub fn generate<W, C>(
    settings: &GeneratorSettings,
    args: &GenerateArgs,
    clipboard: C,
    output: &mut W,
) -> io::Result<()>
where
    W: Write,
    C: ClipboardService,
{
    let mut screen = GeneratorScreen::new(settings.clone(), MemoryPreferenceStore::new(), clipboard);

    if let Some(length) = args.length {
        let applied = screen.set_length(length);
        if applied != length {
            log::warn!(
                "Length {} outside {}..={}, using {}",
                length,
                settings.min_length,
                settings.max_length,
                applied
            );
        }
    }
    screen.set_include_digits(!args.no_digits && (args.digits || settings.include_digits));
    screen.set_include_special_chars(
        !args.no_special && (args.special || settings.include_special_chars),
    );
    if args.pin {
        screen.set_mode(GenerationMode::NumericPin);
    }

    let mut rng = rng_from_seed(args.seed);

    for _ in 0..args.count {
        if let Some(password) = screen.generate(&mut *rng) {
            writeln!(output, "{}", format_password(&password))?;
        }
    }

    if args.count > 1 {
        writeln!(output, "\nHistory (last {}):", screen.history().len())?;
        writeln!(output, "{}", screen.history().display_text())?;
    }

    if args.copy {
        if screen.copy_current() {
            writeln!(output, "📋 Copied to clipboard")?;
        } else if !screen.copy_visible() {
            writeln!(output, "Not copied: needs at least {} characters", COPY_MIN_LENGTH)?;
        } else {
            writeln!(output, "Not copied: clipboard unavailable")?;
        }
    }

    Ok(())
}

/// `strength`: print the level of `password`
pub fn strength<W: Write>(password: &str, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", classify_strength(password))
}

/// `theme`: optionally store a new theme, then print the current one
pub fn theme<S, W>(store: &mut S, dark: bool, light: bool, output: &mut W) -> io::Result<()>
where
    S: PreferenceStore,
    W: Write,
{
    let requested = if dark {
        Some(Theme::Dark)
    } else if light {
        Some(Theme::Light)
    } else {
        None
    };

    if let Some(theme) = requested {
        if let Err(e) = preferences::save_theme(store, theme) {
            log::warn!("Could not persist theme: {}", e);
        }
    }

    writeln!(output, "{}", preferences::load_theme(store).as_str())
}

/// Seeded generator when `seed` is given, thread-local otherwise
pub fn rng_from_seed(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}
