//! Passgen - program entry point

use anyhow::Context;
use clap::Parser;
use passgen::{
    cli::{Cli, Command},
    clipboard::SystemClipboard,
    commands,
    config::AppConfig,
    preferences::JsonPreferenceStore,
    screen::GeneratorScreen,
    ui,
};
use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    log::debug!("Command line: {:?}", cli);

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load settings")?;
    log::debug!(
        "Slider bounds {}..={}, default {}",
        config.generator.min_length,
        config.generator.max_length,
        config.generator.default_length
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        Command::Generate(args) => {
            let clipboard = SystemClipboard::holding(Duration::from_secs(args.hold));
            commands::generate(&config.generator, &args, clipboard, &mut output)?;
        }
        Command::Strength { password } => {
            commands::strength(&password, &mut output)?;
        }
        Command::Theme { dark, light } => {
            let mut store = JsonPreferenceStore::open(preferences_path(&config)?);
            commands::theme(&mut store, dark, light, &mut output)?;
        }
        Command::Interactive => {
            let path = preferences_path(&config)?;
            log::info!("🗂️  Preferences file: {}", path.display());

            let store = JsonPreferenceStore::open(path);
            let mut screen = GeneratorScreen::new(config.generator.clone(), store, SystemClipboard::new());
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut rng = rand::thread_rng();

            ui::run_interactive(&mut screen, &mut input, &mut output, &mut rng)?;
        }
    }

    Ok(())
}

/// Initialise the logger
fn init_logger() {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&log_level))
        .format_timestamp_secs()
        .init();
}

/// Configured preferences file or the platform default
fn preferences_path(config: &AppConfig) -> anyhow::Result<PathBuf> {
    match &config.preferences.path {
        Some(path) => Ok(path.clone()),
        None => JsonPreferenceStore::default_path().context("no preferences location"),
    }
}
