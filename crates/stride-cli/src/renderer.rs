//! Terminal rendering module for rich markdown output
//!
//! Plans are rendered with termimad, with plain text as a fallback for pipes
//! and `--no-color`.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::AnsiValue(244));
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match header_color(line) {
                // Headers keep their hashes so plan structure stays visible
                Some(color) => println!("{color}{line}{RESET}"),
                None if line.trim_start().starts_with("- [x]") => {
                    println!("{GREEN}{line}{RESET}");
                }
                None if line.starts_with("  - ") => println!("{DIM}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

/// Color for a markdown header line: plan title, week, then day headings.
fn header_color(line: &str) -> Option<&'static str> {
    if line.starts_with("### ") {
        Some(CYAN)
    } else if line.starts_with('#') {
        Some(BLUE)
    } else {
        None
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
