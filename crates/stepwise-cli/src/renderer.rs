//! Terminal rendering of the markdown produced by the core display types.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[36m";
const WARNING_COLOR: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Prints markdown either styled with termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Writes `markdown` to stdout.
    ///
    /// Headers keep their hash marks so step numbers stay readable, and
    /// quoted lines (step error messages) are highlighted.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();

        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            out.flush()?;
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{HEADER_COLOR}{line}{RESET}")?;
            } else if let Some(quoted) = line.strip_prefix("> ") {
                writeln!(out, "{WARNING_COLOR}{quoted}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# 1. Signup\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
