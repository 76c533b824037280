//! Terminal rendering for the markdown produced by `sprout_core::display`.
//!
//! Rich output styles headers, bold labels and error lines with termimad;
//! `--no-color` prints the markdown untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER: &str = "\x1b[32m";
const ERROR: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so nesting stays readable
                println!("{HEADER}{line}{RESET}");
            } else if line.starts_with("Error:") {
                println!("{ERROR}{line}{RESET}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
