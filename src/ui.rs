//! Terminal front end for the generator screen

use crate::clipboard::ClipboardService;
use crate::preferences::PreferenceStore;
use crate::screen::GeneratorScreen;
use crate::types::{GeneratedPassword, GenerationMode};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Menu entries
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOption {
    Generate,
    SetLength,
    ToggleDigits,
    ToggleSpecialChars,
    TogglePin,
    Copy,
    ToggleDarkMode,
    Quit,
    Invalid,
}

impl From<&str> for MenuOption {
    fn from(choice: &str) -> Self {
        match choice.trim() {
            "1" | "g" => MenuOption::Generate,
            "2" | "l" => MenuOption::SetLength,
            "3" => MenuOption::ToggleDigits,
            "4" => MenuOption::ToggleSpecialChars,
            "5" => MenuOption::TogglePin,
            "6" | "c" => MenuOption::Copy,
            "7" => MenuOption::ToggleDarkMode,
            "0" | "q" | "quit" => MenuOption::Quit,
            _ => MenuOption::Invalid,
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// One-line result for a generated password
pub fn format_password(password: &GeneratedPassword) -> String {
    format!("{}  [{}]", password.text(), password.strength())
}

fn show_menu<W, P, C>(output: &mut W, screen: &GeneratorScreen<P, C>) -> io::Result<()>
where
    W: Write,
    P: PreferenceStore,
    C: ClipboardService,
{
    let pin = screen.mode() == GenerationMode::NumericPin;
    writeln!(output, "{}", "-".repeat(30))?;
    writeln!(output, "1. Generate")?;
    writeln!(output, "2. Length ({})", screen.length())?;
    writeln!(output, "3. Digits ({})", on_off(screen.include_digits()))?;
    writeln!(output, "4. Special characters ({})", on_off(screen.include_special_chars()))?;
    writeln!(output, "5. PIN mode ({})", on_off(pin))?;
    if screen.copy_visible() {
        writeln!(output, "6. Copy password")?;
    }
    writeln!(output, "7. Dark mode ({})", on_off(screen.theme().is_dark()))?;
    writeln!(output, "0. Quit")?;
    Ok(())
}

/// Run the interactive menu until quit or end of input
pub fn run_interactive<R, W, P, C, G>(
    screen: &mut GeneratorScreen<P, C>,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    P: PreferenceStore,
    C: ClipboardService,
    G: Rng + ?Sized,
{
    writeln!(output, "🔐 Password generator")?;

    loop {
        show_menu(output, screen)?;
        let Some(choice) = read_line(input, output, "> ")? else {
            break;
        };

        match MenuOption::from(choice.as_str()) {
            MenuOption::Generate => {
                if screen.generate(rng).is_some() {
                    write!(output, "{}", screen.view())?;
                }
            }
            MenuOption::SetLength => {
                let settings = screen.settings();
                let prompt = format!("Length ({}-{}): ", settings.min_length, settings.max_length);
                let Some(value) = read_line(input, output, &prompt)? else {
                    break;
                };
                match value.parse::<usize>() {
                    Ok(length) => {
                        let length = screen.set_length(length);
                        writeln!(output, "Length set to {}", length)?;
                    }
                    Err(_) => writeln!(output, "❌ Not a number, length stays {}", screen.length())?,
                }
            }
            MenuOption::ToggleDigits => screen.set_include_digits(!screen.include_digits()),
            MenuOption::ToggleSpecialChars => {
                screen.set_include_special_chars(!screen.include_special_chars())
            }
            MenuOption::TogglePin => {
                let mode = match screen.mode() {
                    GenerationMode::NumericPin => GenerationMode::RandomCharacters,
                    GenerationMode::RandomCharacters => GenerationMode::NumericPin,
                };
                screen.set_mode(mode);
            }
            MenuOption::Copy => {
                if screen.copy_current() {
                    writeln!(output, "📋 Password copied")?;
                } else {
                    writeln!(output, "❌ Nothing to copy")?;
                }
            }
            MenuOption::ToggleDarkMode => {
                let theme = screen.set_dark_mode(!screen.theme().is_dark());
                writeln!(output, "Theme: {}", theme.as_str())?;
            }
            MenuOption::Quit => break,
            MenuOption::Invalid => writeln!(output, "❌ Invalid choice")?,
        }
    }

    writeln!(output, "👋 Bye")?;
    Ok(())
}
