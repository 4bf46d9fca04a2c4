//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Visual style of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
    Warning,
    Info,
    Header,
    Dim,
}

/// Wrap `text` in the ANSI codes for `style`.
pub fn colorize(text: &str, style: Style) -> String {
    match style {
        Style::Success => text.green().to_string(),
        Style::Error => text.red().to_string(),
        Style::Warning => text.yellow().to_string(),
        Style::Info => text.blue().to_string(),
        Style::Header => text.cyan().bold().to_string(),
        Style::Dim => text.dimmed().to_string(),
    }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is also off when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::with_settings(
            args.quiet,
            args.no_color || config.output.no_color || !io::stdout().is_terminal(),
        )
    }

    fn with_settings(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Formatting ─────────────────────────────────────────────────────────

    /// `text` in `style`, or unchanged when colour is off.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            colorize(text, style)
        }
    }

    fn marked(&self, mark: &str, msg: &str, style: Style) -> String {
        format!("{} {}", self.paint(mark, style), self.paint(msg, style))
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.marked("\u{2713}", msg, Style::Success))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.marked("\u{26a0}", msg, Style::Warning))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.marked("\u{2139}", msg, Style::Info))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(text, Style::Header))
    }

    /// Spinner for a step of unknown length; hidden in quiet mode or when
    /// stdout is not a terminal.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.quiet || !self.term.is_term() {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(msg.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_wraps_in_escape_codes() {
        let painted = colorize("done", Style::Success);
        assert!(painted.contains("done"));
        assert!(painted.starts_with("\u{1b}["));
        assert_ne!(painted, colorize("done", Style::Error));
    }

    #[test]
    fn colorize_is_pure() {
        assert_eq!(
            colorize("same", Style::Header),
            colorize("same", Style::Header)
        );
    }

    #[test]
    fn no_color_paints_plain() {
        let out = OutputManager::with_settings(false, true);
        assert_eq!(out.paint("plain", Style::Warning), "plain");
        assert_eq!(out.marked("\u{2713}", "ok", Style::Success), "\u{2713} ok");
        assert!(!out.supports_color());
    }

    #[test]
    fn color_paints_escape_codes() {
        let out = OutputManager::with_settings(false, false);
        assert_eq!(out.paint("x", Style::Info), colorize("x", Style::Info));
        assert!(out.supports_color());
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = OutputManager::with_settings(true, true);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        let out = OutputManager::with_settings(true, true);
        assert!(out.spinner("working").is_hidden());
    }
}
