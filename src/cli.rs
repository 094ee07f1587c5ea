//! Command line definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Generate random passwords and PINs",
    long_about = r#"
Generates random passwords or numeric PINs, rates their strength and keeps
a short history of the last five results for the current session.

Typical usage:
  passgen generate --length 14 --digits --special
  passgen generate --pin --length 6
  passgen strength 'abcdefghij1!'
  passgen theme --dark
  passgen interactive
"#
)]
pub struct Cli {
    /// Settings file (toml, json, yaml)
    #[arg(long, env = "PASSGEN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate passwords or PINs
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Strength {
        /// Password to rate
        password: String,
    },

    /// Show or change the stored theme
    Theme {
        /// Switch dark mode on
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Switch dark mode off
        #[arg(long)]
        light: bool,
    },

    /// Menu driven generator screen
    Interactive,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of characters; defaults to the configured slider position
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include digits 0-9
    #[arg(short, long, conflicts_with = "no_digits")]
    pub digits: bool,

    /// Leave out digits even when the settings enable them
    #[arg(long)]
    pub no_digits: bool,

    /// Include the special characters !"#$%&'()*+,-./
    #[arg(short, long, conflicts_with = "no_special")]
    pub special: bool,

    /// Leave out special characters even when the settings enable them
    #[arg(long)]
    pub no_special: bool,

    /// Generate a numeric PIN instead
    #[arg(short, long)]
    pub pin: bool,

    /// How many results to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the last result to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Seconds to keep serving the copied text before exiting (Linux)
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub hold: u64,
}
